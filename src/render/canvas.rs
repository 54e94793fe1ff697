//! In-memory pixel framebuffer and its projection onto terminal cells.

use ratatui::{buffer::Buffer, layout::Rect, style::Color as TermColor, widgets::Widget};

use super::surface::{Color, RenderSurface};
use crate::game::Point;

/// A `width` x `height` pixel framebuffer, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::WHITE; (width as usize) * (height as usize)],
        }
    }

    /// Color at `(x, y)`, or `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl RenderSurface for PixelCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let x0 = x.max(0) as i64;
        let y0 = y.max(0) as i64;
        let x1 = (x as i64 + width as i64).min(self.width as i64);
        let y1 = (y as i64 + height as i64).min(self.height as i64);

        for py in y0..y1 {
            let row = (py as usize) * (self.width as usize);
            for px in x0..x1 {
                self.pixels[row + px as usize] = color;
            }
        }
    }
}

/// How many surface pixels one terminal cell stands for.
///
/// Terminal cells are roughly twice as tall as they are wide, so a grid cell
/// spans two columns and one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasScale {
    pub px_per_col: u32,
    pub px_per_row: u32,
}

impl CanvasScale {
    pub fn for_cell_size(cell_size: u32) -> Self {
        Self {
            px_per_col: (cell_size / 2).max(1),
            px_per_row: cell_size.max(1),
        }
    }

    /// Terminal columns and rows needed to show a canvas
    pub fn terminal_size(&self, canvas: &PixelCanvas) -> (u16, u16) {
        let cols = canvas.width.div_ceil(self.px_per_col);
        let rows = canvas.height.div_ceil(self.px_per_row);
        (
            cols.min(u16::MAX as u32) as u16,
            rows.min(u16::MAX as u32) as u16,
        )
    }

    /// Surface-space point for a terminal cell position
    pub fn to_surface(&self, column: u16, row: u16) -> Point {
        Point::new(
            (column as u32 * self.px_per_col) as i32,
            (row as u32 * self.px_per_row) as i32,
        )
    }
}

/// Widget drawing a [`PixelCanvas`] by sampling the center pixel of each
/// terminal cell
pub struct CanvasView<'a> {
    canvas: &'a PixelCanvas,
    scale: CanvasScale,
}

impl<'a> CanvasView<'a> {
    pub fn new(canvas: &'a PixelCanvas, scale: CanvasScale) -> Self {
        Self { canvas, scale }
    }
}

impl Widget for CanvasView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let px = col as u32 * self.scale.px_per_col + self.scale.px_per_col / 2;
                let py = row as u32 * self.scale.px_per_row + self.scale.px_per_row / 2;

                let Some(color) = self.canvas.pixel(px, py) else {
                    continue;
                };

                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(' ')
                        .set_bg(TermColor::Rgb(color.r, color.g, color.b));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas_is_white() {
        let canvas = PixelCanvas::new(4, 3);
        assert_eq!(canvas.pixel(0, 0), Some(Color::WHITE));
        assert_eq!(canvas.pixel(3, 2), Some(Color::WHITE));
        assert_eq!(canvas.pixel(4, 0), None);
        assert_eq!(canvas.pixel(0, 3), None);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.fill_rect(-5, 8, 8, 20, Color::BLUE);

        assert_eq!(canvas.pixel(0, 8), Some(Color::BLUE));
        assert_eq!(canvas.pixel(2, 9), Some(Color::BLUE));
        assert_eq!(canvas.pixel(3, 9), Some(Color::WHITE));
        assert_eq!(canvas.pixel(0, 7), Some(Color::WHITE));
    }

    #[test]
    fn test_fill_rect_fully_outside() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.fill_rect(20, 20, 5, 5, Color::BLUE);
        canvas.fill_rect(-30, 0, 5, 5, Color::BLUE);
        assert!(canvas.pixels.iter().all(|c| *c == Color::WHITE));
    }

    #[test]
    fn test_clear() {
        let mut canvas = PixelCanvas::new(3, 3);
        canvas.fill_rect(0, 0, 1, 1, Color::BLUE);
        canvas.clear(Color::LIGHT_GREEN);
        assert!(canvas.pixels.iter().all(|c| *c == Color::LIGHT_GREEN));
    }

    #[test]
    fn test_scale() {
        let scale = CanvasScale::for_cell_size(20);
        let canvas = PixelCanvas::new(400, 400);

        assert_eq!(scale.terminal_size(&canvas), (40, 20));
        assert_eq!(scale.to_surface(3, 2), Point::new(30, 40));

        let tiny = CanvasScale::for_cell_size(1);
        assert_eq!(tiny.px_per_col, 1);
        assert_eq!(tiny.px_per_row, 1);
    }

    #[test]
    fn test_view_projects_cells() {
        let mut canvas = PixelCanvas::new(40, 20);
        // Grid cell (1, 0) with 20 px cells
        canvas.fill_rect(20, 0, 20, 20, Color::BLUE);
        let scale = CanvasScale::for_cell_size(20);
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);

        CanvasView::new(&canvas, scale).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].bg, TermColor::Rgb(255, 255, 255));
        assert_eq!(buf[(1, 0)].bg, TermColor::Rgb(255, 255, 255));
        assert_eq!(buf[(2, 0)].bg, TermColor::Rgb(0, 0, 255));
        assert_eq!(buf[(3, 0)].bg, TermColor::Rgb(0, 0, 255));
    }
}
