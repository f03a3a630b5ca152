//! **knight-core** — core types for knight path search.
//!
//! This crate provides the foundational types shared by the search and the
//! worker layer: board geometry, algebraic notation, and a cooperative
//! cancellation token.

pub mod context;
pub mod geom;
pub mod notation;

pub use context::Context;
pub use geom::{Board, BoardIter, Square};
pub use notation::{NotationError, parse_algebraic, to_algebraic};
