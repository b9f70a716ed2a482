//! Game session: the imperative shell around the pure transitions.

use crate::action::{Action, Interaction, InteractionKind};
use crate::game::{self, GameState};
use crate::{Position, Transition};
use tracing::{debug, info, instrument};

/// Owns the authoritative snapshot for one table.
///
/// Presentation code holds a session, forwards clicks into it, and redraws
/// from [`GameSession::state`]. The session never edits the board itself;
/// every change goes through [`game::dispatch`].
#[derive(Debug, Clone)]
pub struct GameSession {
    state: GameState,
    log: Vec<Action>,
    last_kind: Option<InteractionKind>,
}

impl GameSession {
    /// Creates a session showing the preview board, not yet started.
    #[instrument]
    pub fn new() -> Self {
        Self::from_state(game::preview_snapshot())
    }

    /// Creates a session around an existing snapshot.
    #[instrument(skip(state))]
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            log: Vec::new(),
            last_kind: None,
        }
    }

    /// Returns the current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the removals and jumps applied so far, oldest first.
    pub fn log(&self) -> &[Action] {
        &self.log
    }

    /// Returns how the most recent interaction was resolved.
    pub fn last_kind(&self) -> Option<InteractionKind> {
        self.last_kind
    }

    /// Marks the session's game as started.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        self.state = game::start_game(&self.state);
    }

    /// Replaces the snapshot with a fresh game and clears the log.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!(actions = self.log.len(), "Resetting session");
        self.state = game::new_game();
        self.log.clear();
        self.last_kind = None;
    }

    /// Interacts with the cell at `position`.
    #[instrument(skip(self))]
    pub fn interact(&mut self, position: Position) -> InteractionKind {
        let Transition {
            state,
            kind,
            action,
        } = game::dispatch(&self.state, Interaction::new(position));

        if let Some(action) = action {
            debug!(%action, "Recording action");
            self.log.push(action);
        }
        self.state = state;
        self.last_kind = Some(kind);
        kind
    }

    /// Interacts with raw coordinates; off-board coordinates are ignored.
    #[instrument(skip(self))]
    pub fn interact_at(&mut self, row: i64, col: i64) -> InteractionKind {
        match Position::from_coords(row, col) {
            Some(position) => self.interact(position),
            None => {
                let kind = if self.state.phase().is_over() {
                    InteractionKind::Frozen
                } else {
                    InteractionKind::Ignored
                };
                self.last_kind = Some(kind);
                kind
            }
        }
    }

    /// Feeds a sequence of positions in order, returning the last resolution.
    #[instrument(skip(self, positions))]
    pub fn replay<I>(&mut self, positions: I) -> Option<InteractionKind>
    where
        I: IntoIterator<Item = Position>,
    {
        positions.into_iter().map(|p| self.interact(p)).last()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
