//! Selection invariant: valid moves always describe the selected piece.

use super::super::{GameState, Phase};
use super::Invariant;
use crate::rules;

/// Invariant: the selection and its destinations agree with the board.
///
/// No selection means no destinations. A selection only exists while
/// playing, names one of the current player's pieces, and its destinations
/// are exactly what the move generator produces for it.
pub struct SelectionConsistentInvariant;

impl Invariant<GameState> for SelectionConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        match state.selected_piece() {
            None => state.valid_moves().is_empty(),
            Some(selected) => {
                let player = state.current_player();
                state.phase() == Phase::Playing
                    && state.board().get(selected).is_owned_by(player)
                    && state.valid_moves() == rules::valid_moves(state.board(), selected, player)
            }
        }
    }

    fn description() -> &'static str {
        "Valid moves belong to a selected piece of the player to move"
    }
}
