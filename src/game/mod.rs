//! Core game logic module for Snake
//!
//! The engine is a synchronous state machine: input only buffers a
//! direction, `tick` advances one cell, `render` paints a surface. Timing
//! lives in the driver, terminal I/O in the modes.

pub mod action;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use action::{swipe_direction, Direction, Point};
pub use config::{FoodPlacement, GameConfig};
pub use engine::{GameEngine, TickOutcome};
pub use state::{CollisionType, GameState, Grid, Position, Snake, START_FOOD, START_POSITION};
