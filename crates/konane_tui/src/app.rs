//! Application state and key handling.

use crate::config::TuiConfig;
use crate::input::move_cursor;
use crossterm::event::KeyCode;
use konane::{GameSession, InteractionKind, Phase, Position};
use tracing::{debug, instrument};

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the terminal board.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    cursor: Position,
    config: TuiConfig,
    status_message: String,
}

impl App {
    /// Creates the application showing the preview board.
    #[instrument(skip(config))]
    pub fn new(config: TuiConfig) -> Self {
        Self {
            session: GameSession::new(),
            cursor: Position::new(3, 3).unwrap_or_default(),
            config,
            status_message: "Press Enter to start, q to quit.".to_string(),
        }
    }

    /// Gets the game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the configuration.
    pub fn config(&self) -> &TuiConfig {
        &self.config
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('n') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            other => self.cursor = move_cursor(self.cursor, other),
        }
        Flow::Continue
    }

    /// Starts a fresh game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.new_game();
        self.status_message = self.session.state().status();
    }

    fn activate(&mut self) {
        if !self.session.state().started() {
            self.session.start();
            self.status_message = self.session.state().status();
            return;
        }

        let kind = self.session.interact(self.cursor);
        let state = self.session.state();
        self.status_message = match kind {
            InteractionKind::Selected | InteractionKind::Reselected if state.valid_moves().is_empty() => {
                format!("That piece has no jumps. {}", state.status())
            }
            InteractionKind::Deselected => format!("Not a legal landing. {}", state.status()),
            InteractionKind::Ignored if state.phase() == Phase::Setup => {
                format!("Pick one of your own pieces. {}", state.status())
            }
            InteractionKind::Frozen | InteractionKind::Moved if state.phase().is_over() => {
                format!("{} Press n for a new game.", state.status())
            }
            _ => state.status(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use konane::Player;

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            assert_eq!(app.handle_key(*key), Flow::Continue);
        }
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(TuiConfig::default());
        assert_eq!(app.handle_key(KeyCode::Char('q')), Flow::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), Flow::Quit);
    }

    #[test]
    fn test_first_enter_starts_game() {
        let mut app = App::new(TuiConfig::default());
        assert!(!app.session().state().started());

        press(&mut app, &[KeyCode::Enter]);
        assert!(app.session().state().started());
        assert_eq!(app.session().state().removed_pieces(), 0);
        assert_eq!(app.status_message(), "Setup: Black removes a piece");
    }

    #[test]
    fn test_setup_by_keyboard() {
        let mut app = App::new(TuiConfig::default());
        // Cursor starts on 3,3 (Black); Black removes it, White removes 3,4.
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter, KeyCode::Right, KeyCode::Enter]);

        let state = app.session().state();
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.current_player(), Player::Black);
        assert_eq!(app.cursor(), Position::new(3, 4).unwrap());
    }

    #[test]
    fn test_wrong_piece_during_setup_explains() {
        let mut app = App::new(TuiConfig::default());
        press(&mut app, &[KeyCode::Enter, KeyCode::Right, KeyCode::Enter]);
        assert!(app.status_message().starts_with("Pick one of your own pieces"));
        assert_eq!(app.session().state().removed_pieces(), 0);
    }

    #[test]
    fn test_jump_by_keyboard() {
        let mut app = App::new(TuiConfig::default());
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter, KeyCode::Right, KeyCode::Enter]);
        // Select 3,1 and jump the White piece on 3,2 into 3,3.
        press(
            &mut app,
            &[KeyCode::Left, KeyCode::Left, KeyCode::Left, KeyCode::Enter],
        );
        assert_eq!(app.session().state().selected_piece(), Position::new(3, 1));
        press(&mut app, &[KeyCode::Right, KeyCode::Right, KeyCode::Enter]);

        let state = app.session().state();
        assert_eq!(app.session().last_kind(), Some(InteractionKind::Moved));
        assert!(state.board().is_empty(Position::new(3, 2).unwrap()));
        assert_eq!(state.current_player(), Player::White);
        assert_eq!(app.status_message(), "White to move");
    }

    #[test]
    fn test_restart_resets_session() {
        let mut app = App::new(TuiConfig::default());
        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(app.session().log().len(), 1);

        press(&mut app, &[KeyCode::Char('n')]);
        assert!(app.session().log().is_empty());
        assert!(app.session().state().started());
        assert_eq!(app.session().state().removed_pieces(), 0);
    }
}
