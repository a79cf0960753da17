//! Snapshot-based undo/redo history.
//!
//! Every user-initiated mutation records a deep copy of the whole document
//! plus the selection. Undo and redo walk a cursor over a bounded stack of
//! those snapshots; restoring replaces the live tree wholesale, so there is
//! no per-mutation inverse to maintain.

use pd_core::{Component, ComponentId};

/// An immutable deep copy of the document state at one point in time.
/// Snapshots never share mutable state with the live tree or each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub roots: Vec<Component>,
    pub selected: Option<ComponentId>,
}

/// Bounded snapshot stack with a current-index cursor.
///
/// Invariant: `cursor < stack.len()` whenever the stack is non-empty. When
/// the capacity overflows, the oldest snapshot is evicted from the front
/// and the cursor stays on the newest entry.
#[derive(Debug)]
pub struct History {
    stack: Vec<Snapshot>,
    cursor: usize,
    max_size: usize,
}

impl History {
    pub const DEFAULT_MAX_SIZE: usize = 50;

    pub fn new(max_size: usize) -> Self {
        Self {
            stack: Vec::new(),
            cursor: 0,
            // A zero-capacity history could never hold the baseline state.
            max_size: max_size.max(1),
        }
    }

    /// Record a new snapshot: discard every "future" redo entry past the
    /// cursor, append, and evict the oldest entry on overflow. The cursor
    /// ends on the new snapshot either way.
    pub fn record(&mut self, snapshot: Snapshot) {
        if !self.stack.is_empty() {
            self.stack.truncate(self.cursor + 1);
        }
        self.stack.push(snapshot);
        if self.stack.len() > self.max_size {
            self.stack.remove(0);
        }
        self.cursor = self.stack.len() - 1;
    }

    /// Step back one snapshot. `None` (cursor unchanged) when already at
    /// the oldest retained state.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.stack.get(self.cursor)
    }

    /// Step forward one snapshot. `None` when there is no future to redo.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.stack.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        !self.stack.is_empty() && self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        !self.stack.is_empty() && self.cursor + 1 < self.stack.len()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
        self.cursor = 0;
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_SIZE)
    }
}
