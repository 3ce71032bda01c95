mod grid;
mod history;
mod models;
mod puzzle;
mod update;

pub use grid::Grid;
pub use history::History;
pub use models::{Cell, Direction, MoveOutcome, RejectReason, UserAction, Vec2};
pub use puzzle::PuzzleState;
pub use update::attempt_move;
