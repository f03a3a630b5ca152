use knight_core::Square;
use thiserror::Error;

/// Errors reported by [`PathFinder`](crate::PathFinder).
///
/// Finding no path is not an error; it is an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The board must have at least one square.
    #[error("board size must be at least 1, got {size}")]
    InvalidBoardSize { size: i32 },
    /// A start or end square lies outside the board.
    #[error("square {square} is off the {size}x{size} board")]
    OffBoard { square: Square, size: i32 },
    /// A configured resource limit was exceeded. No partial result is kept.
    #[error("search limit exceeded: {metric} (limit={limit}, observed={observed})")]
    LimitExceeded {
        metric: &'static str,
        limit: u64,
        observed: u64,
    },
    /// The search observed a cancelled [`Context`](knight_core::Context).
    #[error("search cancelled")]
    Cancelled,
}
