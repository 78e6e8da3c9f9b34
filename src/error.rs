use std::io;

use thiserror::Error;

/// Start-up configuration problems. Every variant is fatal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must be at least {min}x{min} cells, got {width}x{height}")]
    GridTooSmall { width: u16, height: u16, min: u16 },

    #[error("grid is too large ({width}x{height}); consider reducing it to at most {max}x{max}")]
    GridTooLarge { width: u16, height: u16, max: u16 },

    #[error("number of foods should be less than {cells}, got {requested}")]
    TooManyFoods { requested: usize, cells: usize },

    #[error("initial snake length must be at least 1")]
    InitialLengthZero,

    #[error("initial snake length {length} is too high; it must be less than {limit}")]
    InitialLengthTooLong { length: usize, limit: usize },

    #[error("tick rate must be a positive number, got {0}")]
    NonPositiveTickRate(f64),

    #[error("tick rate {rate} is too fast; use at most {max} ticks per second")]
    TickRateTooHigh { rate: f64, max: f64 },
}

/// Top-level error returned by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
