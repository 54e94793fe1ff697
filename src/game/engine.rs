use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::{
    action::{swipe_direction, Direction, Point},
    config::{FoodPlacement, GameConfig},
    state::{CollisionType, GameState, Grid, Position},
};
use crate::render::{Color, DisplaySink, RenderSurface};

/// Random draws tried before falling back to scanning the whole grid
const FOOD_SPAWN_ATTEMPTS: usize = 32;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is over; nothing moved
    Idle,
    /// The snake moved one cell without eating
    Moved,
    /// The snake ate and grew; carries the new score
    Ate { score: u32 },
    /// The move would have collided; the game is now over
    Collided(CollisionType),
}

/// The game engine: owns the state and applies input, ticks and rendering
pub struct GameEngine {
    config: GameConfig,
    grid: Grid,
    state: GameState,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose food placement is reproducible
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let grid = config.grid();
        Self {
            config,
            grid,
            state: GameState::initial(),
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    /// Place the first food of the session
    pub fn initialize(&mut self) {
        self.spawn_food();
        info!(
            grid_width = self.grid.width,
            grid_height = self.grid.height,
            food_x = self.state.food.x,
            food_y = self.state.food.y,
            "Game initialized"
        );
    }

    /// Buffer `direction` for the next tick.
    ///
    /// Ignored while the game is over or when `direction` reverses the
    /// current one. Returns whether it was buffered.
    pub fn handle_direction_input(&mut self, direction: Direction) -> bool {
        if self.state.game_over || self.state.direction.is_opposite(direction) {
            return false;
        }

        self.state.next_direction = direction;
        true
    }

    /// Buffer the direction of a swipe from `start` to `end`, under the same
    /// guards as [`GameEngine::handle_direction_input`].
    pub fn handle_swipe_input(&mut self, start: Point, end: Point) -> bool {
        match swipe_direction(start, end) {
            Some(direction) => self.handle_direction_input(direction),
            None => false,
        }
    }

    /// Advance the game by one cell
    pub fn tick(&mut self, display: &mut dyn DisplaySink) -> TickOutcome {
        if self.state.game_over {
            return TickOutcome::Idle;
        }

        self.state.direction = self.state.next_direction;
        let new_head = self
            .state
            .snake
            .head()
            .moved_in_direction(self.state.direction);

        // The tail is still in place here, so moving into it collides
        if let Some(collision) = self.state.collision_at(self.grid, new_head) {
            self.state.game_over = true;
            display.show_game_over(self.state.score);
            info!(
                score = self.state.score,
                length = self.state.snake.len(),
                ?collision,
                "Game over"
            );
            return TickOutcome::Collided(collision);
        }

        if new_head == self.state.food {
            self.state.snake.advance(new_head, true);
            self.state.score += 1;
            display.set_score(self.state.score);
            self.spawn_food();
            debug!(score = self.state.score, "Food eaten");
            TickOutcome::Ate {
                score: self.state.score,
            }
        } else {
            self.state.snake.advance(new_head, false);
            TickOutcome::Moved
        }
    }

    /// Move the food to a random cell
    pub fn spawn_food(&mut self) {
        let food = match self.config.food_placement {
            FoodPlacement::AvoidSnake => match self.free_cell() {
                Some(cell) => cell,
                None => self.random_cell(),
            },
            FoodPlacement::Anywhere => self.random_cell(),
        };
        self.state.food = food;
    }

    /// Start over after a game over. Returns false (and does nothing) while
    /// the game is still running.
    pub fn restart(&mut self, display: &mut dyn DisplaySink) -> bool {
        if !self.state.game_over {
            return false;
        }

        let final_score = self.state.score;
        self.state = GameState::initial();
        display.set_score(self.state.score);
        display.hide_game_over();
        self.spawn_food();
        info!(previous_score = final_score, "Game restarted");
        true
    }

    /// Draw the background, the snake and the food
    pub fn render(&self, surface: &mut dyn RenderSurface) {
        let palette = &self.config.palette;
        surface.clear(palette.background);

        for segment in self.state.snake.segments() {
            self.fill_cell(surface, segment, palette.snake);
        }

        self.fill_cell(surface, self.state.food, palette.food);
    }

    fn fill_cell(&self, surface: &mut dyn RenderSurface, pos: Position, color: Color) {
        let size = self.config.cell_size;
        let origin = i32::try_from(size)
            .ok()
            .and_then(|cell| Some((pos.x.checked_mul(cell)?, pos.y.checked_mul(cell)?)));

        // Unreachable for validated configs; such a cell lies off any surface
        let Some((x, y)) = origin else {
            return;
        };
        surface.fill_rect(x, y, size, size, color);
    }

    fn random_cell(&mut self) -> Position {
        let x = self.rng.gen_range(0..self.grid.width.max(1));
        let y = self.rng.gen_range(0..self.grid.height.max(1));
        Position::new(x, y)
    }

    /// Uniform draw over the cells off the snake. Rejection sampling first,
    /// then a full scan for a nearly full board.
    fn free_cell(&mut self) -> Option<Position> {
        for _ in 0..FOOD_SPAWN_ATTEMPTS {
            let cell = self.random_cell();
            if !self.state.snake.occupies(cell) {
                return Some(cell);
            }
        }

        let snake = &self.state.snake;
        let mut free = Vec::with_capacity(self.grid.cell_count().saturating_sub(snake.len()));
        free.extend(self.grid.cells().filter(|c| !snake.occupies(*c)));
        free.choose(&mut self.rng).copied()
    }
}
