use crate::game::Point;

/// Pairs a gesture's start with its end.
///
/// The start is forgotten as soon as the gesture ends, so every swipe is
/// measured from its own press.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start: Option<Point>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn touch_start(&mut self, point: Point) {
        self.start = Some(point);
    }

    /// Finish the gesture; `None` if no start was recorded
    pub fn touch_end(&mut self, point: Point) -> Option<(Point, Point)> {
        self.start.take().map(|start| (start, point))
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}
