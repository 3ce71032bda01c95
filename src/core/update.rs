use crate::core::Cell::{Box as BoxOnFloor, BoxOnTarget, Floor, Player, PlayerOnTarget, Target, Wall};
use crate::core::{Direction, Grid, MoveOutcome, RejectReason};
use crate::error::InvariantError;

/// Moves the player one cell in `direction`, pushing a box if one is in the way.
/// Rejected moves leave the grid untouched.
pub fn attempt_move(grid: &mut Grid, direction: Direction) -> Result<MoveOutcome, InvariantError> {
    let player = grid.find_player()?;
    let dir = direction.offset();

    // terrain left behind once the player steps off
    let original = if grid[player] == PlayerOnTarget { Target } else { Floor };

    let next = player + dir;
    let Some(dest) = grid.get(next) else {
        return Ok(MoveOutcome::Rejected(RejectReason::OutOfBounds));
    };

    match dest {
        Wall => return Ok(MoveOutcome::Rejected(RejectReason::Wall)),
        Floor => {
            grid[player] = original;
            grid[next] = Player;
            return Ok(MoveOutcome::Walked);
        }
        Target => {
            grid[player] = original;
            grid[next] = PlayerOnTarget;
            return Ok(MoveOutcome::Walked);
        }
        BoxOnFloor | BoxOnTarget => {}
        Player | PlayerOnTarget => return Err(InvariantError::PlayerCount(2)),
    }

    let beyond = next + dir;
    let Some(far) = grid.get(beyond) else {
        return Ok(MoveOutcome::Rejected(RejectReason::OutOfBounds));
    };
    if !(far == Floor || far == Target) {
        return Ok(MoveOutcome::Rejected(RejectReason::Blocked));
    }

    grid[player] = original;
    grid[next] = if dest == BoxOnFloor { Player } else { PlayerOnTarget };
    grid[beyond] = if far == Floor { BoxOnFloor } else { BoxOnTarget };

    Ok(MoveOutcome::Pushed)
}
