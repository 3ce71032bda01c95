use crate::core::Grid;

/// Stack of full grid snapshots backing undo and reset.
#[derive(Clone, Debug, Default)]
pub struct History {
    snapshots: Vec<Grid>,
}

impl History {
    pub fn new() -> Self {
        History {
            snapshots: Vec::new(),
        }
    }

    pub fn record_snapshot(&mut self, grid: &Grid) {
        self.snapshots.push(grid.clone());
    }

    /// Most recent snapshot, or `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<Grid> {
        self.snapshots.pop()
    }

    /// Oldest snapshot; clears the stack.
    pub fn reset(&mut self) -> Option<Grid> {
        if self.snapshots.is_empty() {
            return None;
        }
        let first = self.snapshots.swap_remove(0);
        self.snapshots.clear();
        Some(first)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
