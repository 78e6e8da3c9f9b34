use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::{GameConfig, GridSize};
use crate::food::generate_food;
use crate::grid::{classify_grid, is_out_of_bounds, Grid};
use crate::input::Direction;
use crate::snake::{Position, Snake};

/// Why a game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum EndReason {
    SelfCollision,
    WallCollision,
    GridFilled,
}

impl EndReason {
    /// Returns true when the player won.
    #[must_use]
    pub fn is_victory(self) -> bool {
        self == Self::GridFilled
    }
}

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Playing,
    Over(EndReason),
}

/// What happened during one [`GameState::step`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum StepEvent {
    Moved,
    AteFood,
    Ended(EndReason),
}

/// Complete mutable game state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    snake: Snake,
    foods: Vec<Position>,
    grid: Grid,
    status: GameStatus,
    tick_count: u64,
    rng: StdRng,
}

impl GameState {
    /// Creates a new session seeded from the operating system.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible simulations.
    #[must_use]
    pub fn new_with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Self {
        let snake = Snake::new(config.initial_length);
        let mut foods = Vec::with_capacity(config.food_count);
        generate_food(&mut foods, &snake, config.food_count, config.grid, &mut rng);
        let grid = classify_grid(&snake, &foods, config.grid);

        info!(
            width = config.grid.width,
            height = config.grid.height,
            length = snake.len(),
            foods = foods.len(),
            "game started"
        );

        Self {
            config,
            snake,
            foods,
            grid,
            status: GameStatus::Playing,
            tick_count: 0,
            rng,
        }
    }

    /// Forwards a direction change to the snake while the game runs.
    pub fn turn(&mut self, direction: Direction) {
        if self.status == GameStatus::Playing {
            self.snake.turn(direction);
        }
    }

    /// Advances simulation by one gameplay tick.
    ///
    /// Order: move, eat (grow and replenish food), collisions, win check,
    /// then the grid is reclassified. Once the game is over this only
    /// reports the stored end reason.
    pub fn step(&mut self) -> StepEvent {
        if let GameStatus::Over(reason) = self.status {
            return StepEvent::Ended(reason);
        }

        self.tick_count += 1;
        self.snake.move_forward();

        let ate_food = self.eat_food();

        if self.snake.hit_self() {
            return self.finish(EndReason::SelfCollision);
        }
        if is_out_of_bounds(self.snake.head(), self.config.grid) {
            return self.finish(EndReason::WallCollision);
        }

        self.grid = classify_grid(&self.snake, &self.foods, self.config.grid);
        if self.grid.is_fully_snaked() {
            return self.finish(EndReason::GridFilled);
        }

        let event = if ate_food {
            StepEvent::AteFood
        } else {
            StepEvent::Moved
        };
        debug!(tick = self.tick_count, ?event, length = self.snake.len(), "step");
        event
    }

    fn eat_food(&mut self) -> bool {
        let Some(index) = self
            .foods
            .iter()
            .position(|food| self.snake.ate_food(*food))
        else {
            return false;
        };

        self.snake.grow();
        self.foods.remove(index);

        let occupied = classify_grid(&self.snake, &self.foods, self.config.grid);
        if !occupied.is_full() {
            generate_food(
                &mut self.foods,
                &self.snake,
                self.config.food_count,
                self.config.grid,
                &mut self.rng,
            );
        }

        true
    }

    fn finish(&mut self, reason: EndReason) -> StepEvent {
        self.grid = classify_grid(&self.snake, &self.foods, self.config.grid);
        self.status = GameStatus::Over(reason);
        info!(
            tick = self.tick_count,
            length = self.snake.len(),
            ?reason,
            "game over"
        );
        StepEvent::Ended(reason)
    }

    /// Returns the snake.
    #[must_use]
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Returns the food currently on the board.
    #[must_use]
    pub fn foods(&self) -> &[Position] {
        &self.foods
    }

    /// Returns the classification computed by the latest tick.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the end reason once the game is over.
    #[must_use]
    pub fn end_reason(&self) -> Option<EndReason> {
        match self.status {
            GameStatus::Playing => None,
            GameStatus::Over(reason) => Some(reason),
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn bounds(&self) -> GridSize {
        self.config.grid
    }

    /// Replaces the snake and food set, e.g. to stage a scenario.
    pub fn set_board(&mut self, snake: Snake, foods: Vec<Position>) {
        self.snake = snake;
        self.foods = foods;
        self.grid = classify_grid(&self.snake, &self.foods, self.config.grid);
    }
}
