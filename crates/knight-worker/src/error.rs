use knight_core::{NotationError, Square};
use knight_paths::SearchError;
use thiserror::Error;

/// A search request that the caller-side policy refuses to run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("board size must be {min}-{max}, got {size}")]
    BoardSizeOutOfRange { size: i32, min: i32, max: i32 },
    #[error("square {square} is off the {size}x{size} board")]
    OffBoard { square: Square, size: i32 },
    #[error(transparent)]
    Notation(#[from] NotationError),
}

/// Failure to obtain a result from a background search.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("failed to spawn search worker: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("search worker stopped without delivering a result")]
    Disconnected,
    #[error(transparent)]
    Search(#[from] SearchError),
}
