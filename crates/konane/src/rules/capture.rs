//! Move application and capture removal.

use super::super::{Board, Cell, Direction, Move, Player, Position};
use tracing::{debug, instrument};

/// Applies a validated jump, returning the new board and the move record.
///
/// The piece is lifted from `from` and placed on `to`; every opponent piece
/// strictly between them is removed. Cells past `to` are untouched. The
/// input board is not modified.
///
/// `to` must come from [`valid_moves`](super::valid_moves) for `from`, so the
/// two positions share a row or column. Should they not, only the relocation
/// happens and nothing is captured.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, from: Position, to: Position, player: Player) -> (Board, Move) {
    let mut next = board.clone();
    next.set(to, Cell::Occupied(player));
    next.set(from, Cell::Empty);

    let mut captured = Vec::new();
    if let Some(direction) = Direction::between(from, to) {
        let mut cursor = from;
        while let Some(step) = cursor.step(direction) {
            if step == to {
                break;
            }
            cursor = step;
            if next.get(cursor).is_owned_by(player.opponent()) {
                next.set(cursor, Cell::Empty);
                captured.push(cursor);
            }
        }
    }

    debug!(%player, %from, %to, ?captured, "Applied move");
    (next, Move::new(player, from, to, captured))
}
