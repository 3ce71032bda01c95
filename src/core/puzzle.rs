use crate::core::{attempt_move, Grid, History, MoveOutcome, UserAction};
use crate::error::InvariantError;
use tracing::debug;

/// Live state of one level: the mutable grid plus its undo history and step count.
#[derive(Clone, Debug)]
pub struct PuzzleState {
    level_id: usize,
    grid: Grid,
    history: History,
    steps: u32,
}

impl PuzzleState {
    pub fn new(level_id: usize, grid: Grid) -> Self {
        PuzzleState {
            level_id,
            grid,
            history: History::new(),
            steps: 0,
        }
    }

    /// Applies one command. Every move attempt records a snapshot and counts as a
    /// step before legality is checked, so rejected moves still consume an undo slot.
    pub fn apply(&mut self, action: UserAction) -> Result<Option<MoveOutcome>, InvariantError> {
        match action {
            UserAction::Move(direction) => {
                self.history.record_snapshot(&self.grid);
                self.steps += 1;
                let outcome = attempt_move(&mut self.grid, direction)?;
                if outcome.is_rejected() {
                    debug!(level = self.level_id, ?direction, ?outcome, "move rejected");
                }
                Ok(Some(outcome))
            }
            UserAction::Undo => {
                if let Some(previous) = self.history.undo() {
                    self.grid = previous;
                    debug!(level = self.level_id, remaining = self.history.len(), "undo");
                }
                Ok(None)
            }
            UserAction::Reset => {
                if let Some(initial) = self.history.reset() {
                    self.grid = initial;
                    debug!(level = self.level_id, "reset to initial grid");
                }
                Ok(None)
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.grid.is_complete()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn level_id(&self) -> usize {
        self.level_id
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
