//! First-class interaction and move types.
//!
//! A click on the board is a domain event, not a side effect. The engine
//! receives it as an [`Interaction`], decides what it means from the current
//! phase and selection, and reports the decision as an [`InteractionKind`].

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The single command the engine accepts: "interact with this cell".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interaction {
    /// The cell the player interacted with.
    pub position: Position,
}

impl Interaction {
    /// Creates a new interaction.
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

/// How the engine resolved an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum InteractionKind {
    /// Setup phase: the current player removed one of their pieces.
    Removed,
    /// A piece was selected and its destinations computed.
    Selected,
    /// The selection moved to another piece.
    Reselected,
    /// A jump was applied.
    Moved,
    /// The click was not a valid destination; the selection was cleared.
    Deselected,
    /// Nothing happened.
    Ignored,
    /// The game is over and accepts no further input.
    Frozen,
}

impl InteractionKind {
    /// Returns true if the board changed as a result.
    pub fn changes_board(self) -> bool {
        matches!(self, InteractionKind::Removed | InteractionKind::Moved)
    }
}

/// A completed jump, as recorded after application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who moved.
    pub player: Player,
    /// Where the piece started.
    pub from: Position,
    /// Where the piece landed.
    pub to: Position,
    /// Opponent pieces removed, ordered outward from `from`.
    pub captured: Vec<Position>,
}

impl Move {
    /// Creates a new move record.
    #[instrument]
    pub fn new(player: Player, from: Position, to: Position, captured: Vec<Position>) -> Self {
        Self {
            player,
            from,
            to,
            captured,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.player, self.from, self.to)?;
        if !self.captured.is_empty() {
            let captured = self
                .captured
                .iter()
                .map(|pos| pos.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, " x {}", captured)?;
        }
        Ok(())
    }
}

/// A completed action, for game logs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// A setup-phase removal.
    Removal {
        /// The player whose piece was removed.
        player: Player,
        /// The emptied cell.
        position: Position,
    },
    /// A jump.
    Jump(Move),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Removal { player, position } => write!(f, "{} removes {}", player, position),
            Action::Jump(mv) => write!(f, "{}", mv),
        }
    }
}
