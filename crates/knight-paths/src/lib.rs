//! Exhaustive knight path enumeration.
//!
//! [`PathFinder`] lists every sequence of knight moves between two squares
//! that fits within a move budget, not just the shortest ones:
//!
//! ```
//! use knight_core::Square;
//! use knight_paths::PathFinder;
//!
//! let finder = PathFinder::new(8, 1).unwrap();
//! let paths = finder.find_all_paths(Square::new(0, 0), Square::new(1, 2)).unwrap();
//! assert_eq!(paths, vec![vec![Square::new(0, 0), Square::new(1, 2)]]);
//! ```
//!
//! Results come back in discovery order, which follows [`KNIGHT_JUMPS`].
//! Long budgets get expensive quickly; [`SearchLimits`] and a cancellable
//! [`Context`](knight_core::Context) let callers bound the work.
//!
//! Other pieces can be searched by implementing [`Mover`] and building the
//! finder with [`PathFinder::with_mover`].

mod error;
mod finder;
mod knight;
mod limits;
mod traits;

pub use error::SearchError;
pub use finder::{Path, PathFinder, SearchReport};
pub use knight::{KNIGHT_JUMPS, Knight, is_knight_jump};
pub use limits::{FinderConfig, SearchLimits};
pub use traits::Mover;
