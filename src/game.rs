use crate::config::{GameConfig, GridSize};
use crate::food::place_food;
use crate::input::{clamp_direction, Direction};
use crate::rng::GameRng;
use crate::snake::{Position, Snake};

/// Complete game state for one session.
///
/// States are immutable snapshots: [`GameState::next`] derives a fresh value
/// from the previous one instead of mutating it, so callers may keep any
/// snapshot they have observed and compare it against later ones.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    /// Direction applied on the most recent tick.
    pub committed_dir: Direction,
    /// Most recent direction request, buffered for the next tick.
    pub pending_dir: Direction,
    pub food: Option<Position>,
    pub score: u32,
    pub tick_count: u64,
    pub is_over: bool,
    pub is_started: bool,
    bounds: GridSize,
    rng: GameRng,
}

impl GameState {
    /// Creates the starting state for `seed`: a centered snake facing right
    /// and a food cell placed with the fresh generator.
    #[must_use]
    pub fn new(config: GameConfig, seed: u32) -> Self {
        let bounds = config.grid;
        let head = Position {
            x: i32::from(bounds.width / 2),
            y: i32::from(bounds.height / 2),
        };
        let snake = Snake::new(head, config.start_length, Direction::Right);
        let mut rng = GameRng::from_seed(seed);
        let food = place_food(&mut rng, bounds, &snake);

        Self {
            snake,
            committed_dir: Direction::Right,
            pending_dir: Direction::Right,
            food,
            score: 0,
            tick_count: 0,
            is_over: false,
            is_started: false,
            bounds,
            rng,
        }
    }

    /// Returns the grid dimensions this state plays on.
    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.bounds
    }

    /// Advances the simulation by one tick, returning the successor state.
    ///
    /// Terminal and not-yet-started states advance to themselves. The
    /// transition never fails: collisions end the game through `is_over`
    /// and a full board leaves `food` empty.
    #[must_use]
    pub fn next(&self) -> Self {
        if self.is_over || !self.is_started {
            return self.clone();
        }

        // pending_dir may hold anything the controller buffered; clamp it
        // once more so a reversal can never slip into the applied direction.
        let dir = clamp_direction(self.committed_dir, self.pending_dir);
        let next_head = self.snake.head().step(dir);

        let mut state = self.clone();
        state.committed_dir = dir;
        state.pending_dir = dir;

        // Self collision is checked against the pre-move body, tail included:
        // stepping onto the cell the tail is about to vacate still ends the
        // game.
        if !next_head.is_within_bounds(self.bounds) || self.snake.occupies(next_head) {
            state.is_over = true;
            return state;
        }

        let ate = self.food == Some(next_head);
        state.snake.push_head(next_head);
        if ate {
            state.score += 1;
            state.food = place_food(&mut state.rng, state.bounds, &state.snake);
        } else {
            state.snake.drop_tail();
        }
        state.tick_count += 1;

        state
    }
}
