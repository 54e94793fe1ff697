//! Frame scheduling around the engine.
//!
//! A [`Driver`] owns the engine together with the surface and sink it talks
//! to. Each frame runs one tick followed by one render, then tells the host
//! when the next frame is due, or that the loop has stopped because the game
//! is over. The host owns the actual timer.

use std::time::Duration;

use tracing::{debug, info};

use crate::game::{Direction, GameEngine, Point, TickOutcome};
use crate::render::{DisplaySink, RenderSurface};

/// When the host should run the next frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Run the next frame after this delay
    After(Duration),
    /// Do not reschedule until a restart
    Stopped,
}

pub struct Driver<S, D> {
    engine: GameEngine,
    surface: S,
    display: D,
    running: bool,
    frames: u64,
}

impl<S: RenderSurface, D: DisplaySink> Driver<S, D> {
    pub fn new(engine: GameEngine, surface: S, display: D) -> Self {
        Self {
            engine,
            surface,
            display,
            running: false,
            frames: 0,
        }
    }

    /// Place the first food and run the first frame right away
    pub fn start(&mut self) -> Schedule {
        self.engine.initialize();
        self.display.set_score(self.engine.state().score);
        self.running = true;
        info!(
            frame_delay_ms = self.frame_delay().as_millis() as u64,
            "Driver started"
        );
        self.frame()
    }

    /// Run one tick and one render
    pub fn frame(&mut self) -> Schedule {
        if !self.running {
            return Schedule::Stopped;
        }

        let outcome = self.engine.tick(&mut self.display);
        self.engine.render(&mut self.surface);
        self.frames += 1;

        match outcome {
            TickOutcome::Collided(_) | TickOutcome::Idle => {
                self.running = false;
                debug!(frames = self.frames, "Frame loop stopped");
                Schedule::Stopped
            }
            TickOutcome::Moved | TickOutcome::Ate { .. } => Schedule::After(self.frame_delay()),
        }
    }

    /// Restart after a game over and resume the frame loop.
    ///
    /// Returns `None` when the game is still running.
    pub fn restart(&mut self) -> Option<Schedule> {
        if !self.engine.restart(&mut self.display) {
            return None;
        }

        self.running = true;
        Some(self.frame())
    }

    pub fn direction(&mut self, direction: Direction) -> bool {
        self.engine.handle_direction_input(direction)
    }

    pub fn swipe(&mut self, start: Point, end: Point) -> bool {
        self.engine.handle_swipe_input(start, end)
    }

    pub fn frame_delay(&self) -> Duration {
        self.engine.config().frame_delay()
    }

    /// Whether the host should keep scheduling frames
    pub fn is_scheduled(&self) -> bool {
        self.running
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}
