// Error types raised by the board model and the request parsing step

use thiserror::Error;

/// Errors raised while building the occupancy grid
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid board size {size}, must be positive")]
    InvalidBoard { size: i32 },
    #[error("board size {size} exceeds the supported maximum of {max}")]
    BoardTooLarge { size: i32, max: i32 },
}

/// Errors raised when a move request cannot be turned into search input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("snake {id} has no head and no body segments")]
    MissingHead { id: String },
}
