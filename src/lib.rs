//! Canvas Snake - single-screen Snake on a pixel canvas
//!
//! This library provides:
//! - Core game logic and the engine state machine (game module)
//! - Render surface / display sink traits and their terminal implementations (render module)
//! - Frame scheduling around the engine (driver module)
//! - Keyboard and pointer input mapping (input module)
//! - The interactive terminal mode (modes module)

pub mod driver;
pub mod game;
pub mod input;
pub mod modes;
pub mod render;
