//! Cooperative search cancellation.
//!
//! A search can run long (exponential in depth × branching). Hosts run
//! `get_move` off the interaction thread and keep a clone of the
//! engine's [`CancelToken`]; setting it makes the search unwind between
//! sibling moves — an explicit checkpoint, not silent blocking — and
//! `get_move` returns whatever it had completed. Best effort: a move
//! already being explored finishes its subtree first.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create an unset token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the search to stop at its next checkpoint.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// Clear the flag so the engine can search again.
    pub fn reset(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}
