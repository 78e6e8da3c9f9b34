use clap::ValueEnum;
use ratatui::style::Color;

use crate::error::ConfigError;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Visual shape of snake and food cells.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum Shape {
    /// Square cells; the head is rounded on the side it is heading toward.
    #[default]
    Square,
    /// Round cells for every snake segment and food.
    Circle,
}

/// Immutable game configuration, validated once at start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub grid: GridSize,
    pub initial_length: usize,
    pub food_count: usize,
    /// Ticks per second at game start.
    pub tick_rate: f64,
    /// Scale the tick rate up a little after every food eaten.
    pub speed_up_on_eat: bool,
    pub shape: Shape,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridSize {
                width: DEFAULT_GRID_WIDTH,
                height: DEFAULT_GRID_HEIGHT,
            },
            initial_length: DEFAULT_INITIAL_LENGTH,
            food_count: DEFAULT_FOOD_COUNT,
            tick_rate: DEFAULT_TICK_RATE,
            speed_up_on_eat: false,
            shape: Shape::Square,
        }
    }
}

impl GameConfig {
    /// Checks every start-up constraint, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let GridSize { width, height } = self.grid;

        if width < MIN_GRID_DIMENSION || height < MIN_GRID_DIMENSION {
            return Err(ConfigError::GridTooSmall {
                width,
                height,
                min: MIN_GRID_DIMENSION,
            });
        }

        if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
            return Err(ConfigError::GridTooLarge {
                width,
                height,
                max: MAX_GRID_DIMENSION,
            });
        }

        let cells = self.grid.total_cells();
        if self.food_count >= cells {
            return Err(ConfigError::TooManyFoods {
                requested: self.food_count,
                cells,
            });
        }

        if self.initial_length == 0 {
            return Err(ConfigError::InitialLengthZero);
        }

        // The snake starts stretched along the top row.
        let limit = usize::from(width) - 1;
        if self.initial_length >= limit {
            return Err(ConfigError::InitialLengthTooLong {
                length: self.initial_length,
                limit,
            });
        }

        if !self.tick_rate.is_finite() || self.tick_rate <= 0.0 {
            return Err(ConfigError::NonPositiveTickRate(self.tick_rate));
        }

        if self.tick_rate > MAX_START_TICK_RATE {
            return Err(ConfigError::TickRateTooHigh {
                rate: self.tick_rate,
                max: MAX_START_TICK_RATE,
            });
        }

        Ok(())
    }
}

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 12;

/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 12;

/// Default initial snake length.
pub const DEFAULT_INITIAL_LENGTH: usize = 4;

/// Number of foods kept on the board by default.
pub const DEFAULT_FOOD_COUNT: usize = 1;

/// Base tick delay in milliseconds.
pub const DEFAULT_TICK_DELAY_MS: u64 = 150;

/// Default ticks per second, derived from the base delay.
pub const DEFAULT_TICK_RATE: f64 = 1000.0 / DEFAULT_TICK_DELAY_MS as f64;

/// Smallest accepted grid edge.
pub const MIN_GRID_DIMENSION: u16 = 2;

/// Largest accepted grid edge; bigger grids do not fit common terminals.
pub const MAX_GRID_DIMENSION: u16 = 48;

/// Highest tick rate accepted at start-up.
pub const MAX_START_TICK_RATE: f64 = 25.0;

/// Highest tick rate reachable with the in-game speed keys.
pub const MAX_RUNTIME_TICK_RATE: f64 = 32.0;

/// Tick rate multiplier applied per food when speed-up is enabled.
pub const SPEED_UP_SCALE: f64 = 1.0065;

/// Terminal columns used to draw one grid cell.
pub const CELL_WIDTH: u16 = 2;

pub const COLOR_BACKGROUND: Color = Color::Rgb(50, 50, 50);
pub const COLOR_SNAKE_HEAD: Color = Color::Rgb(232, 200, 19);
pub const COLOR_SNAKE_BODY: Color = Color::Rgb(4, 188, 136);
pub const COLOR_EMPTY_CELL: Color = Color::Rgb(80, 80, 80);
pub const COLOR_WALL: Color = Color::Rgb(220, 220, 240);
pub const COLOR_FOOD: Color = Color::Rgb(232, 29, 73);
pub const COLOR_HUD: Color = Color::Gray;

#[cfg(test)]
mod tests {
    use super::{GameConfig, GridSize};
    use crate::error::ConfigError;

    fn config(width: u16, height: u16) -> GameConfig {
        GameConfig {
            grid: GridSize { width, height },
            ..GameConfig::default()
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_food_count_filling_the_grid() {
        let mut cfg = config(5, 5);
        cfg.initial_length = 3;
        cfg.food_count = 25;

        assert_eq!(
            cfg.validate(),
            Err(ConfigError::TooManyFoods {
                requested: 25,
                cells: 25
            })
        );

        cfg.food_count = 24;
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_initial_length_that_reaches_the_far_wall() {
        let mut cfg = config(5, 5);
        cfg.initial_length = 4;

        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InitialLengthTooLong {
                length: 4,
                limit: 4
            })
        );

        cfg.initial_length = 3;
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_initial_length() {
        let mut cfg = config(5, 5);
        cfg.initial_length = 0;

        assert_eq!(cfg.validate(), Err(ConfigError::InitialLengthZero));
    }

    #[test]
    fn rejects_non_positive_and_excessive_tick_rates() {
        let mut cfg = GameConfig::default();

        cfg.tick_rate = 0.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositiveTickRate(_))
        ));

        cfg.tick_rate = f64::NAN;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositiveTickRate(_))
        ));

        cfg.tick_rate = 30.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::TickRateTooHigh { .. })
        ));
    }

    #[test]
    fn rejects_grids_outside_supported_range() {
        assert!(matches!(
            config(1, 10).validate(),
            Err(ConfigError::GridTooSmall { .. })
        ));
        assert!(matches!(
            config(12, 200).validate(),
            Err(ConfigError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn total_cells_multiplies_dimensions() {
        assert_eq!(
            GridSize {
                width: 7,
                height: 3
            }
            .total_cells(),
            21
        );
    }
}
