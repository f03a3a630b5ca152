//! Cooperative cancellation shared between a caller and a running search.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A simple cooperative-cancellation token backed by an [`AtomicBool`].
///
/// Path searches poll it at every node and stop with a cancellation error
/// once it is set. Clones share the same flag, so a caller can keep one clone
/// and hand the other to a worker.
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let ctx = Context::new();
        let other = ctx.clone();
        assert!(!other.is_done());
        ctx.cancel();
        assert!(other.is_done());
    }

    #[test]
    fn cancel_crosses_threads() {
        let ctx = Context::default();
        let remote = ctx.clone();
        std::thread::spawn(move || remote.cancel()).join().unwrap();
        assert!(ctx.is_done());
    }
}
