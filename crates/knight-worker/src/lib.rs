//! Caller-side orchestration for knight path search.
//!
//! The search in [`knight_paths`] is a plain synchronous call whose cost
//! grows exponentially with the move budget. This crate wraps it the way an
//! interactive front end needs it:
//!
//! - [`BoardPolicy`] enforces the board-size range and flags large budgets;
//! - [`SearchRequest`] bundles and validates the inputs;
//! - [`spawn_search`] runs a request on a worker thread and delivers one
//!   [`SearchOutcome`] through a single channel, with cancellation;
//! - [`format_outcome`] and [`status_line`] render results in algebraic
//!   notation, shortest paths first.

mod error;
mod format;
mod policy;
mod request;
mod worker;

pub use error::{RequestError, WorkerError};
pub use format::{format_outcome, format_path, status_line};
pub use policy::{BoardPolicy, Budget};
pub use request::SearchRequest;
pub use worker::{SearchHandle, SearchOutcome, run_search, spawn_search};
