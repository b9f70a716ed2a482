//! Winner invariant: a winner exists exactly when the game is over.

use super::super::{GameState, Phase};
use super::Invariant;
use crate::rules;

/// Invariant: the game ends exactly when the player to move is stuck.
///
/// A finished game names the opponent of the stuck player as winner. A game
/// in play always leaves the player to move at least one jump.
pub struct WinnerConsistentInvariant;

impl Invariant<GameState> for WinnerConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let to_move = state.current_player();
        match (state.phase(), state.winner()) {
            (Phase::Setup, None) => true,
            (Phase::Playing, None) => rules::has_legal_move(state.board(), to_move),
            (Phase::Finished, Some(winner)) => {
                winner == to_move.opponent() && !rules::has_legal_move(state.board(), to_move)
            }
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Winner is set exactly when the player to move has no jump"
    }
}
