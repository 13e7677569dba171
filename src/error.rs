// Error types: fatal configuration errors and session I/O errors

use thiserror::Error;

/// Configuration errors. These are caller mistakes detected at construction
/// time; `main` reports them with a `*****` prefix and terminates.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    #[error("Arena created with invalid size {rows} by {cols}!")]
    InvalidArenaSize { rows: i32, cols: i32 },
    #[error("Cannot create Game with negative number of robots!")]
    NegativeRobotCount,
    #[error("Trying to create Game with {requested} robots; only {max} are allowed!")]
    TooManyRobots { requested: i32, max: usize },
    #[error("Cannot create Game with nowhere to place the robots!")]
    NowhereToPlaceRobots,
    #[error("Robot created with invalid coordinates ({row},{col})!")]
    InvalidRobotCoordinates { row: usize, col: usize },
    #[error("Player created with invalid coordinates ({row},{col})!")]
    InvalidPlayerCoordinates { row: usize, col: usize },
}

/// Diagnostic printed before the process exits on a configuration error
pub fn fatal_message(err: &ConfigError) -> String {
    format!("***** {}", err)
}

/// Errors raised while a session is being played
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
