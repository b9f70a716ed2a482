//! Opening removals.
//!
//! Before play starts each side lifts one of its own pieces, Black first.
//! After the second removal Black always has the first move.

use super::super::{Board, Cell, Phase, Player, Position};
use tracing::{debug, instrument};

/// Number of removals that end the setup phase.
pub const REMOVALS_PER_GAME: u8 = 2;

/// Removes `player`'s piece at `position`.
///
/// Returns `None` when the cell does not hold one of `player`'s pieces.
#[instrument(skip(board))]
pub fn remove_piece(board: &Board, position: Position, player: Player) -> Option<Board> {
    if !board.get(position).is_owned_by(player) {
        debug!(%position, %player, "Cell is not the remover's piece");
        return None;
    }
    let mut next = board.clone();
    next.set(position, Cell::Empty);
    Some(next)
}

/// Player to act and phase after a removal brings the count to `removed`.
#[instrument]
pub fn after_removal(remover: Player, removed: u8) -> (Player, Phase) {
    if removed >= REMOVALS_PER_GAME {
        (Player::Black, Phase::Playing)
    } else {
        (remover.opponent(), Phase::Setup)
    }
}
