//! Capabilities the engine draws and reports through.
//!
//! The engine never touches a terminal (or any other host) directly: it fills
//! rectangles on a [`RenderSurface`] and pushes text-worthy events into a
//! [`DisplaySink`].

use serde::{Deserialize, Serialize};

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const LIGHT_GREEN: Color = Color::rgb(144, 238, 144);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors the engine paints with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Color,
    pub snake: Color,
    pub food: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            snake: Color::BLUE,
            food: Color::LIGHT_GREEN,
        }
    }
}

/// A fixed-size pixel surface with rectangle primitives
pub trait RenderSurface {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Paint the whole surface with `color`
    fn clear(&mut self, color: Color);

    /// Fill the `width` x `height` rectangle whose top-left corner is at
    /// `(x, y)`. Parts outside the surface are clipped.
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color);
}

/// Receives score and game-over notifications
pub trait DisplaySink {
    fn set_score(&mut self, score: u32);

    fn show_game_over(&mut self, final_score: u32);

    fn hide_game_over(&mut self);
}

/// Text shown for a score
pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

/// Text shown when the game ends
pub fn game_over_text(final_score: u32) -> String {
    format!("Game Over! Your score was {}", final_score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette_colors_are_distinct() {
        let palette = Palette::default();
        assert_ne!(palette.snake, palette.food);
        assert_ne!(palette.snake, palette.background);
        assert_ne!(palette.food, palette.background);
    }

    #[test]
    fn test_texts() {
        assert_eq!(score_text(3), "Score: 3");
        assert_eq!(game_over_text(12), "Game Over! Your score was 12");
    }
}
