//! Phase invariant: the phase agrees with the setup removal count.

use super::super::{Cell, GameState, Phase, Player, Position};
use super::Invariant;
use crate::rules::REMOVALS_PER_GAME;

/// Invariant: setup lasts exactly two removals, Black removing first.
///
/// During setup the board is the opening fill minus one piece per removal:
/// every occupied cell keeps its opening owner, and the first hole is on a
/// Black square. The remover alternates Black, White. Once setup is over the
/// count stays at two.
pub struct PhaseConsistentInvariant;

impl Invariant<GameState> for PhaseConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let removed = state.removed_pieces();
        match state.phase() {
            Phase::Setup => {
                let expected_remover = if removed == 0 {
                    Player::Black
                } else {
                    Player::White
                };
                removed < REMOVALS_PER_GAME
                    && state.board().empty_count() == removed as usize
                    && state.current_player() == expected_remover
                    && Position::all().all(|pos| matches_opening(state, pos))
            }
            Phase::Playing | Phase::Finished => removed == REMOVALS_PER_GAME,
        }
    }

    fn description() -> &'static str {
        "Setup ends after exactly two removals (Black, then White)"
    }
}

/// During setup a cell is either its opening piece or a hole Black made.
fn matches_opening(state: &GameState, pos: Position) -> bool {
    let opening_owner = if pos.is_dark() {
        Player::Black
    } else {
        Player::White
    };
    match state.board().get(pos) {
        Cell::Occupied(owner) => owner == opening_owner,
        Cell::Empty => opening_owner == Player::Black,
    }
}
