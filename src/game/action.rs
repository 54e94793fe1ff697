/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A screen coordinate where a touch or pointer gesture started or ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Maps a swipe gesture onto the direction of its dominant axis.
///
/// The horizontal axis wins only when `|dx| > |dy|`; equal magnitudes fall
/// through to the vertical axis. A gesture with no movement on the chosen
/// axis yields `None`.
pub fn swipe_direction(start: Point, end: Point) -> Option<Direction> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx.abs() > dy.abs() {
        if dx > 0 {
            Some(Direction::Right)
        } else {
            Some(Direction::Left)
        }
    } else if dy > 0 {
        Some(Direction::Down)
    } else if dy < 0 {
        Some(Direction::Up)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_swipe_dominant_axis() {
        let origin = Point::new(100, 100);
        assert_eq!(
            swipe_direction(origin, Point::new(150, 90)),
            Some(Direction::Right)
        );
        assert_eq!(
            swipe_direction(origin, Point::new(40, 120)),
            Some(Direction::Left)
        );
        assert_eq!(
            swipe_direction(origin, Point::new(110, 180)),
            Some(Direction::Down)
        );
        assert_eq!(
            swipe_direction(origin, Point::new(95, 20)),
            Some(Direction::Up)
        );
    }

    #[test]
    fn test_swipe_tie_goes_vertical() {
        let origin = Point::new(0, 0);
        assert_eq!(
            swipe_direction(origin, Point::new(30, 30)),
            Some(Direction::Down)
        );
        assert_eq!(
            swipe_direction(origin, Point::new(30, -30)),
            Some(Direction::Up)
        );
    }

    #[test]
    fn test_swipe_without_movement() {
        let p = Point::new(12, 7);
        assert_eq!(swipe_direction(p, p), None);
    }
}
