use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, interval, sleep_until};
use tracing::{debug, info};

use crate::driver::{Driver, Schedule};
use crate::game::{GameConfig, GameEngine};
use crate::input::{InputHandler, KeyAction, PointerAction, SwipeTracker};
use crate::render::{CanvasScale, PixelCanvas, Renderer, StatusBoard};

pub struct HumanMode {
    driver: Driver<PixelCanvas, StatusBoard>,
    renderer: Renderer,
    scale: CanvasScale,
    input_handler: InputHandler,
    swipe: SwipeTracker,
    next_frame: Option<Instant>,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let canvas = PixelCanvas::new(config.surface_width, config.surface_height);
        let config = config.with_surface(&canvas);
        let scale = CanvasScale::for_cell_size(config.cell_size);
        let engine = match seed {
            Some(seed) => GameEngine::with_seed(config, seed),
            None => GameEngine::new(config),
        };

        Self {
            driver: Driver::new(engine, canvas, StatusBoard::new()),
            renderer: Renderer::new(scale),
            scale,
            input_handler: InputHandler::new(),
            swipe: SwipeTracker::new(),
            next_frame: None,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal, undone if any step fails
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut terminal = restore_on_error(setup_terminal(), || {
            let _ = execute!(stderr(), LeaveAlternateScreen, DisableMouseCapture);
            let _ = disable_raw_mode();
        })?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Redraw at 30 FPS (33ms per frame); game frames follow the driver
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        let schedule = self.driver.start();
        self.apply_schedule(schedule);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                // Game frame, armed only while the driver is scheduled
                _ = sleep_until(self.next_frame.unwrap_or_else(Instant::now)), if self.next_frame.is_some() => {
                    let schedule = self.driver.frame();
                    self.apply_schedule(schedule);
                }

                // Redraw terminal
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.driver.surface(), self.driver.display());
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!(frames = self.driver.frames(), "Quitting");
                break;
            }
        }

        Ok(())
    }

    fn apply_schedule(&mut self, schedule: Schedule) {
        self.next_frame = match schedule {
            Schedule::After(delay) => Some(Instant::now() + delay),
            Schedule::Stopped => None,
        };
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return;
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::Move(direction) => {
                        self.driver.direction(direction);
                    }
                    KeyAction::Restart => self.restart(),
                    KeyAction::Quit => self.should_quit = true,
                    KeyAction::None => {}
                }
            }
            Event::Mouse(mouse) => match self.input_handler.handle_mouse_event(mouse) {
                PointerAction::Press { column, row } => {
                    // A tap on the game-over screen restarts
                    if self.driver.engine().is_game_over() {
                        self.swipe.cancel();
                        self.restart();
                    } else {
                        self.swipe.touch_start(self.scale.to_surface(column, row));
                    }
                }
                PointerAction::Release { column, row } => {
                    let end = self.scale.to_surface(column, row);
                    if let Some((start, end)) = self.swipe.touch_end(end) {
                        let buffered = self.driver.swipe(start, end);
                        debug!(?start, ?end, buffered, "Swipe");
                    }
                }
                PointerAction::None => {}
            },
            _ => {}
        }
    }

    fn restart(&mut self) {
        if let Some(schedule) = self.driver.restart() {
            self.apply_schedule(schedule);
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
    let mut stderr = stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(terminal)
}

/// Run `restore` when `result` is an error, then pass `result` through
fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        restore();
    }
    result
}
