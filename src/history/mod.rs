//! Snapshot-based undo and redo.
//!
//! Two bounded stacks of [`Snapshot`] values: `past` (most recent last)
//! and `future`. Committing a new move records the pre-move state and
//! clears `future` — standard undo/redo semantics where redo is
//! invalidated by divergent history. The past stack is truncated from the
//! oldest end once it exceeds its bound, so memory stays fixed over long
//! sessions.
//!
//! Snapshots share structure through `im`, so recording is cheap even
//! with a large wall set.

use std::collections::VecDeque;

use crate::rules::Snapshot;

/// Bounded undo/redo stacks owned by a `GameState`.
#[derive(Clone, Debug)]
pub struct HistoryManager {
    past: VecDeque<Snapshot>,
    future: Vec<Snapshot>,
    max_len: usize,
}

impl HistoryManager {
    /// Create empty history retaining at most `max_len` undo entries.
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: Vec::new(),
            max_len,
        }
    }

    /// Record the pre-move snapshot of a newly committed move.
    ///
    /// Clears the redo stack and drops the oldest entries beyond the bound.
    pub fn record(&mut self, snapshot: Snapshot) {
        self.past.push_back(snapshot);
        self.future.clear();
        while self.past.len() > self.max_len {
            self.past.pop_front();
        }
    }

    /// Step back: store `current` for redo and return the snapshot to
    /// restore, or `None` if there is nothing to undo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.past.pop_back()?;
        self.future.push(current);
        Some(previous)
    }

    /// Step forward again: store `current` for undo and return the
    /// snapshot to restore, or `None` if there is nothing to redo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.future.pop()?;
        self.past.push_back(current);
        Some(next)
    }

    /// Whether an undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of undo entries currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.past.len()
    }

    /// Whether no undo entries are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.past.is_empty()
    }

    /// Drop both stacks, e.g. after loading an externally supplied state.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}
