//! Game snapshots and the pure transition functions.
//!
//! A [`GameState`] is an immutable snapshot. Every interaction takes the
//! prior snapshot and one [`Interaction`] and produces a complete new
//! snapshot. No transition fails: clicks that mean nothing return the
//! snapshot unchanged, or with the selection cleared.

use super::action::{Action, Interaction, InteractionKind};
#[cfg(debug_assertions)]
use super::contracts::TransitionContract;
use super::invariants::{InvariantSet, InvariantViolation, KonaneInvariants};
use super::rules;
use super::{Board, Phase, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete game snapshot, as read by presentation code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) selected_piece: Option<Position>,
    pub(crate) valid_moves: Vec<Position>,
    pub(crate) phase: Phase,
    pub(crate) winner: Option<Player>,
    pub(crate) removed_pieces: u8,
    pub(crate) started: bool,
}

impl GameState {
    /// Creates a setup-phase snapshot on the opening board, Black to remove.
    fn opening(started: bool) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Black,
            selected_piece: None,
            valid_moves: Vec::new(),
            phase: Phase::Setup,
            winner: None,
            removed_pieces: 0,
            started,
        }
    }

    /// Creates a playing-phase snapshot from an arbitrary position.
    ///
    /// Setup is treated as complete. If `to_move` has no legal jump on
    /// `board` the snapshot is already finished, won by the opponent.
    #[instrument(skip(board))]
    pub fn in_play(board: Board, to_move: Player) -> Self {
        let (phase, winner) = if rules::has_legal_move(&board, to_move) {
            (Phase::Playing, None)
        } else {
            (Phase::Finished, Some(to_move.opponent()))
        };
        Self {
            board,
            current_player: to_move,
            selected_piece: None,
            valid_moves: Vec::new(),
            phase,
            winner,
            removed_pieces: rules::REMOVALS_PER_GAME,
            started: true,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the selected piece, if any.
    pub fn selected_piece(&self) -> Option<Position> {
        self.selected_piece
    }

    /// Returns the landing squares for the selected piece.
    pub fn valid_moves(&self) -> &[Position] {
        &self.valid_moves
    }

    /// Returns the game phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the winner once the game is finished.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns how many setup removals have been made.
    pub fn removed_pieces(&self) -> u8 {
        self.removed_pieces
    }

    /// Returns true once the game has been started from the presentation layer.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Checks the snapshot invariants.
    ///
    /// Snapshots produced by this crate always pass. Use this on snapshots
    /// that arrive from elsewhere, e.g. deserialised ones.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        KonaneInvariants::check_all(self)
    }

    /// Human-readable status line.
    pub fn status(&self) -> String {
        match (self.phase, self.winner) {
            (Phase::Setup, _) => format!("Setup: {} removes a piece", self.current_player),
            (Phase::Playing, _) => format!("{} to move", self.current_player),
            (Phase::Finished, Some(winner)) => format!("Game over. {} wins!", winner),
            (Phase::Finished, None) => "Game over.".to_string(),
        }
    }

    fn cleared(&self) -> Self {
        Self {
            selected_piece: None,
            valid_moves: Vec::new(),
            ..self.clone()
        }
    }
}

/// Result of dispatching one interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The snapshot after the interaction.
    pub state: GameState,
    /// How the interaction was resolved.
    pub kind: InteractionKind,
    /// The removal or jump that was applied, if any.
    pub action: Option<Action>,
}

impl Transition {
    fn unchanged(state: &GameState, kind: InteractionKind) -> Self {
        Self {
            state: state.clone(),
            kind,
            action: None,
        }
    }
}

/// Fresh setup-phase snapshot for a new game.
#[instrument]
pub fn new_game() -> GameState {
    info!("Starting new game");
    GameState::opening(true)
}

/// Read-only opening snapshot for display before a game starts.
///
/// Same shape and board as [`new_game`], with `started` unset.
#[instrument]
pub fn preview_snapshot() -> GameState {
    GameState::opening(false)
}

/// Marks a snapshot as started without touching the rules state.
#[instrument(skip(state))]
pub fn start_game(state: &GameState) -> GameState {
    GameState {
        started: true,
        ..state.clone()
    }
}

/// Interacts with the cell at `position`.
///
/// This is the only mutating entrypoint presentation code needs.
#[instrument(skip(state))]
pub fn interact(state: &GameState, position: Position) -> GameState {
    dispatch(state, Interaction::new(position)).state
}

/// Interacts with raw coordinates.
///
/// Coordinates off the board leave the snapshot unchanged.
#[instrument(skip(state))]
pub fn interact_at(state: &GameState, row: i64, col: i64) -> GameState {
    match Position::from_coords(row, col) {
        Some(position) => interact(state, position),
        None => {
            debug!(row, col, "Ignoring click off the board");
            state.clone()
        }
    }
}

/// Dispatches one interaction, reporting how it was resolved.
#[instrument(skip(state), fields(phase = %state.phase, player = %state.current_player))]
pub fn dispatch(state: &GameState, interaction: Interaction) -> Transition {
    let position = interaction.position;
    let transition = if state.phase.is_over() || state.winner.is_some() {
        Transition::unchanged(state, InteractionKind::Frozen)
    } else {
        match state.phase {
            Phase::Setup => resolve_setup(state, position),
            _ => resolve_play(state, position),
        }
    };

    debug!(%position, kind = %transition.kind, "Interaction resolved");

    #[cfg(debug_assertions)]
    TransitionContract::verify(state, &transition);

    transition
}

fn resolve_setup(state: &GameState, position: Position) -> Transition {
    let remover = state.current_player;
    let Some(board) = rules::remove_piece(&state.board, position, remover) else {
        return Transition::unchanged(state, InteractionKind::Ignored);
    };

    let removed_pieces = state.removed_pieces.saturating_add(1);
    let (current_player, phase) = rules::after_removal(remover, removed_pieces);
    debug!(%remover, %position, removed_pieces, %phase, "Piece removed");

    Transition {
        state: GameState {
            board,
            current_player,
            phase,
            removed_pieces,
            ..state.cleared()
        },
        kind: InteractionKind::Removed,
        action: Some(Action::Removal {
            player: remover,
            position,
        }),
    }
}

fn resolve_play(state: &GameState, position: Position) -> Transition {
    let player = state.current_player;
    let own_piece = state.board.get(position).is_owned_by(player);

    match state.selected_piece {
        None if own_piece => select(state, position, InteractionKind::Selected),
        None => Transition::unchanged(state, InteractionKind::Ignored),
        Some(_) if own_piece => select(state, position, InteractionKind::Reselected),
        Some(from) if state.valid_moves.contains(&position) => make_move(state, from, position),
        Some(_) => Transition {
            state: state.cleared(),
            kind: InteractionKind::Deselected,
            action: None,
        },
    }
}

fn select(state: &GameState, position: Position, kind: InteractionKind) -> Transition {
    let valid_moves = rules::valid_moves(&state.board, position, state.current_player);
    Transition {
        state: GameState {
            selected_piece: Some(position),
            valid_moves,
            ..state.clone()
        },
        kind,
        action: None,
    }
}

fn make_move(state: &GameState, from: Position, to: Position) -> Transition {
    let mover = state.current_player;
    let (board, mv) = rules::apply_move(&state.board, from, to, mover);
    let next = mover.opponent();

    let (phase, winner) = if rules::has_legal_move(&board, next) {
        (Phase::Playing, None)
    } else {
        info!(winner = %mover, loser = %next, "No legal moves remain; game over");
        (Phase::Finished, Some(mover))
    };

    Transition {
        state: GameState {
            board,
            current_player: next,
            phase,
            winner,
            ..state.cleared()
        },
        kind: InteractionKind::Moved,
        action: Some(Action::Jump(mv)),
    }
}
