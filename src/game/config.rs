use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::state::{Grid, START_POSITION};
use crate::render::{Palette, RenderSurface};

/// Frame delay numerator in milliseconds; the delay between frames is this
/// divided by `fps`.
const FRAME_DELAY_BUDGET_MS: u64 = 15_000;

/// Largest accepted surface side in pixels
const MAX_SURFACE_SIDE: u32 = 4096;

/// Where newly spawned food is allowed to land
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodPlacement {
    /// Uniform over the cells the snake does not occupy
    #[default]
    AvoidSnake,
    /// Each axis drawn independently over the whole grid, body included
    Anywhere,
}

/// Configuration for the game, fixed at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side of one grid cell in pixels
    pub cell_size: u32,
    /// Logical update rate; see [`GameConfig::frame_delay`]
    pub fps: u32,
    /// Width of the render surface in pixels
    pub surface_width: u32,
    /// Height of the render surface in pixels
    pub surface_height: u32,
    /// Food spawn policy
    pub food_placement: FoodPlacement,
    /// Colors used by the engine when drawing
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 20,
            fps: 100,
            surface_width: 400,
            surface_height: 400,
            food_placement: FoodPlacement::default(),
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom surface size in pixels
    pub fn new(surface_width: u32, surface_height: u32) -> Self {
        Self {
            surface_width,
            surface_height,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file {:?}", path))
    }

    /// Take the surface size from the surface that will be drawn on
    pub fn with_surface(self, surface: &dyn RenderSurface) -> Self {
        Self {
            surface_width: surface.width(),
            surface_height: surface.height(),
            ..self
        }
    }

    /// Grid extent in cells derived from the surface size
    pub fn grid(&self) -> Grid {
        Grid::from_surface(self.surface_width, self.surface_height, self.cell_size)
    }

    /// Delay between two frames.
    ///
    /// This is `15000 / fps` milliseconds, so the default of 100 yields a
    /// frame every 150 ms (about 6.7 ticks per second), not 100.
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(FRAME_DELAY_BUDGET_MS / u64::from(self.fps.max(1)))
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.cell_size == 0 {
            return Err("cell_size must be at least 1".to_string());
        }

        if self.fps == 0 {
            return Err("fps must be at least 1".to_string());
        }

        if u64::from(self.fps) > FRAME_DELAY_BUDGET_MS {
            return Err(format!(
                "fps must not exceed {} (frame delay would be zero), got {}",
                FRAME_DELAY_BUDGET_MS, self.fps
            ));
        }

        if self.surface_width > MAX_SURFACE_SIDE || self.surface_height > MAX_SURFACE_SIDE {
            return Err(format!(
                "surface must be at most {}x{} px, got {}x{}",
                MAX_SURFACE_SIDE, MAX_SURFACE_SIDE, self.surface_width, self.surface_height
            ));
        }

        let grid = self.grid();
        let cell = i64::from(self.cell_size);
        let pixel_extent = |cells: i32| i32::try_from(i64::from(cells) * cell).is_ok();
        if !pixel_extent(grid.width) || !pixel_extent(grid.height) {
            return Err(format!(
                "cell_size {} is too large for pixel coordinates",
                self.cell_size
            ));
        }

        if !grid.contains(START_POSITION) {
            return Err(format!(
                "surface of {}x{} px with {} px cells gives a {}x{} grid, \
                 too small for the start position ({}, {})",
                self.surface_width,
                self.surface_height,
                self.cell_size,
                grid.width,
                grid.height,
                START_POSITION.x,
                START_POSITION.y
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.fps, 100);
        assert_eq!(config.food_placement, FoodPlacement::AvoidSnake);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_grid_from_surface() {
        let grid = GameConfig::new(400, 300).grid();
        assert_eq!(grid.width, 20);
        assert_eq!(grid.height, 15);

        // Partial cells at the edge are dropped
        let grid = GameConfig::new(410, 419).grid();
        assert_eq!(grid.width, 20);
        assert_eq!(grid.height, 20);
    }

    #[test]
    fn test_with_surface() {
        let canvas = crate::render::PixelCanvas::new(300, 160);
        let config = GameConfig::default().with_surface(&canvas);
        assert_eq!(config.surface_width, 300);
        assert_eq!(config.surface_height, 160);
        assert_eq!(config.grid(), Grid::new(15, 8));
    }

    #[test]
    fn test_frame_delay_keeps_observed_cadence() {
        let config = GameConfig::default();
        assert_eq!(config.frame_delay(), Duration::from_millis(150));

        let config = GameConfig {
            fps: 30,
            ..Default::default()
        };
        assert_eq!(config.frame_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_validation() {
        let mut config = GameConfig::default();
        config.fps = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.cell_size = 0;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.fps = 20_000;
        assert!(config.validate().is_err());

        // 5x5 grid cannot hold the start cell (5, 5)
        let config = GameConfig::new(100, 100);
        assert!(config.validate().is_err());

        let config = GameConfig::new(120, 120);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_oversized_surface() {
        // Cell origins would overflow i32 pixel coordinates
        let config = GameConfig {
            cell_size: 500_000_000,
            ..GameConfig::new(3_000_000_000, 3_000_000_000)
        };
        assert!(config.validate().is_err());

        // Small cells on a huge surface
        let config = GameConfig {
            cell_size: 1,
            ..GameConfig::new(50_000, 50_000)
        };
        assert!(config.validate().is_err());

        let config = GameConfig::new(MAX_SURFACE_SIDE + 1, 400);
        assert!(config.validate().is_err());

        let config = GameConfig::new(MAX_SURFACE_SIDE, MAX_SURFACE_SIDE);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "cell_size": 10, "food_placement": "anywhere" }}"#).unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.cell_size, 10);
        assert_eq!(config.fps, 100);
        assert_eq!(config.food_placement, FoodPlacement::Anywhere);
        assert_eq!(config.grid().width, 40);
    }

    #[test]
    fn test_load_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(GameConfig::load(file.path()).is_err());
    }
}
