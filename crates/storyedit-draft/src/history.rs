//! Undo/redo over draft snapshots.
//!
//! Drafts are immutable and share unchanged overlay lists, so history keeps
//! whole snapshots instead of inverse commands. Undo always lands on a draft
//! that was valid when it was recorded.

use crate::draft::Draft;

/// Undo/redo history stack.
#[derive(Debug)]
pub struct History {
    /// Drafts replaced by an edit (most recent last).
    undo: Vec<Draft>,
    /// Drafts replaced by an undo (most recent last).
    redo: Vec<Draft>,
    /// Maximum history depth.
    max_depth: usize,
}

impl History {
    /// Create a new history with the given maximum depth.
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo: Vec::new(),
            redo: Vec::new(),
            max_depth,
        }
    }

    /// Record the draft an edit just replaced.
    /// Clears the redo stack (new action invalidates redo history).
    pub fn record(&mut self, previous: Draft) {
        self.redo.clear();
        if self.max_depth == 0 {
            return;
        }
        self.undo.push(previous);
        if self.undo.len() > self.max_depth {
            self.undo.remove(0);
        }
    }

    /// Step back. Takes the current draft, returns the one to restore.
    pub fn undo(&mut self, current: Draft) -> Result<Draft, Draft> {
        match self.undo.pop() {
            Some(previous) => {
                self.redo.push(current);
                Ok(previous)
            }
            None => Err(current),
        }
    }

    /// Step forward again. Takes the current draft, returns the one to restore.
    pub fn redo(&mut self, current: Draft) -> Result<Draft, Draft> {
        match self.redo.pop() {
            Some(next) => {
                self.undo.push(current);
                Ok(next)
            }
            None => Err(current),
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Clear all history.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Number of undo steps available.
    pub fn undo_count(&self) -> usize {
        self.undo.len()
    }

    /// Number of redo steps available.
    pub fn redo_count(&self) -> usize {
        self.redo.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(100)
    }
}
