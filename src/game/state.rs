use std::collections::VecDeque;

use super::action::Direction;

/// Cell the snake's head occupies at the start of every game
pub const START_POSITION: Position = Position { x: 5, y: 5 };

/// Food cell of a fresh state, before the first spawn replaces it
pub const START_FOOD: Position = Position { x: 10, y: 10 };

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Extent of the playing field in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Number of whole cells that fit on a surface of the given pixel size
    pub fn from_surface(surface_width: u32, surface_height: u32, cell_size: u32) -> Self {
        let cell_size = cell_size.max(1);
        Self {
            width: (surface_width / cell_size) as i32,
            height: (surface_height / cell_size) as i32,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) as usize) * (self.height.max(0) as usize)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at the front
    body: VecDeque<Position>,
}

impl Snake {
    /// Create a one-cell snake
    pub fn new(head: Position) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    /// Create a snake from explicit segments, head first.
    ///
    /// Returns `None` if `segments` is empty.
    pub fn from_segments(segments: impl IntoIterator<Item = Position>) -> Option<Self> {
        let body: VecDeque<Position> = segments.into_iter().collect();
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Check if position is covered by any segment, head and tail included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Prepend `new_head`; drop the tail unless growing
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.push_front(new_head);

        if !grow {
            self.body.pop_back();
        }
    }

    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the grid
    Wall,
    /// Snake ran into one of its own cells
    SelfCollision,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    /// Direction committed at the last tick
    pub direction: Direction,
    /// Direction buffered from input, committed at the next tick
    pub next_direction: Direction,
    pub score: u32,
    pub game_over: bool,
}

impl GameState {
    /// State every game starts from
    pub fn initial() -> Self {
        Self {
            snake: Snake::new(START_POSITION),
            food: START_FOOD,
            direction: Direction::Right,
            next_direction: Direction::Right,
            score: 0,
            game_over: false,
        }
    }

    /// Classify the collision `pos` would cause as the next head, if any
    pub fn collision_at(&self, grid: Grid, pos: Position) -> Option<CollisionType> {
        if !grid.contains(pos) {
            return Some(CollisionType::Wall);
        }

        if self.snake.occupies(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
