//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use konane::{Direction, Position};

/// Moves the cursor one cell for arrow keys (and vi keys), staying on the board.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let direction = match key {
        KeyCode::Up | KeyCode::Char('k') => Direction::Up,
        KeyCode::Down | KeyCode::Char('j') => Direction::Down,
        KeyCode::Left | KeyCode::Char('h') => Direction::Left,
        KeyCode::Right | KeyCode::Char('l') => Direction::Right,
        _ => return cursor,
    };
    cursor.step(direction).unwrap_or(cursor)
}
