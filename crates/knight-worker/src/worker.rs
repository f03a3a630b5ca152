//! Running searches away from the caller's thread.
//!
//! [`spawn_search`] starts one search on a dedicated thread and hands back a
//! [`SearchHandle`]. The worker delivers exactly one message through a
//! single channel: the complete outcome or the error that stopped it.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use knight_core::Context;
use knight_paths::{Path, PathFinder, SearchError, SearchLimits};

use crate::error::WorkerError;
use crate::request::SearchRequest;

/// A finished search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub request: SearchRequest,
    /// Paths in discovery order.
    pub paths: Vec<Path>,
    pub nodes: u64,
    pub elapsed: Duration,
}

impl SearchOutcome {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Paths ordered shortest first. Paths of equal length keep their
    /// discovery order.
    pub fn sorted_by_length(&self) -> Vec<Path> {
        let mut paths = self.paths.clone();
        paths.sort_by_key(|p| p.len());
        paths
    }
}

type Delivery = Result<SearchOutcome, SearchError>;

/// The caller's end of a background search.
///
/// Dropping the handle cancels the search; its result, if any, is discarded.
#[derive(Debug)]
pub struct SearchHandle {
    ctx: Context,
    rx: Receiver<Delivery>,
    thread: Option<JoinHandle<()>>,
}

impl SearchHandle {
    /// Ask the worker to stop. It delivers [`SearchError::Cancelled`] unless
    /// it already finished.
    pub fn cancel(&self) {
        self.ctx.cancel();
    }

    /// The cancellation token shared with the worker.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Block until the worker delivers.
    pub fn wait(mut self) -> Result<SearchOutcome, WorkerError> {
        let delivery = self.rx.recv().map_err(|_| WorkerError::Disconnected);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::warn!("search worker panicked");
            }
        }
        Ok(delivery??)
    }

    /// Poll for the delivery without blocking. Returns `None` while the
    /// search is still running.
    pub fn try_result(&mut self) -> Option<Result<SearchOutcome, WorkerError>> {
        match self.rx.try_recv() {
            Ok(delivery) => Some(delivery.map_err(WorkerError::from)),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(WorkerError::Disconnected)),
        }
    }
}

impl Drop for SearchHandle {
    fn drop(&mut self) {
        if self.thread.is_some() {
            self.ctx.cancel();
        }
    }
}

/// Start `request` on a new worker thread.
///
/// The request is not checked against any
/// [`BoardPolicy`](crate::BoardPolicy); off-board squares and invalid board
/// sizes come back as [`SearchError`]s through the handle.
pub fn spawn_search(
    request: SearchRequest,
    limits: SearchLimits,
) -> Result<SearchHandle, WorkerError> {
    let ctx = Context::new();
    let (tx, rx) = mpsc::channel();

    let worker_ctx = ctx.clone();
    let thread = thread::Builder::new()
        .name("knight-search".into())
        .spawn(move || {
            let delivery = run_search(request, limits, &worker_ctx);
            if tx.send(delivery).is_err() {
                log::debug!("search result discarded, caller went away");
            }
        })?;

    Ok(SearchHandle {
        ctx,
        rx,
        thread: Some(thread),
    })
}

/// Run `request` on the current thread.
pub fn run_search(
    request: SearchRequest,
    limits: SearchLimits,
    ctx: &Context,
) -> Result<SearchOutcome, SearchError> {
    let started = Instant::now();
    let finder = PathFinder::new(request.board_size, request.max_moves)?.with_limits(limits);
    let report = finder.search(request.start, request.end, ctx)?;
    let elapsed = started.elapsed();
    log::info!(
        "{} paths {} -> {} within {} moves ({} nodes, {:?})",
        report.paths.len(),
        request.start,
        request.end,
        request.max_moves,
        report.nodes,
        elapsed
    );
    Ok(SearchOutcome {
        request,
        paths: report.paths,
        nodes: report.nodes,
        elapsed,
    })
}
