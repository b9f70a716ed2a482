//! Board coordinates and scan directions.

use crate::error::PositionError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the Kōnane board.
pub const BOARD_SIZE: usize = 8;

/// A cell on the 8×8 board.
///
/// Both coordinates are always in `0..8`. The only ways to obtain a
/// `Position` are the checked constructors (and `Default`, the top-left
/// corner), so any `Position` held by a game snapshot is in bounds.
/// Deserialisation goes through the same check.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "RawPosition", into = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

/// Unchecked wire shape of a [`Position`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawPosition {
    row: i64,
    col: i64,
}

impl Position {
    /// Creates a position, returning `None` when either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then(|| Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Creates a position from signed coordinates, as a UI or script might send them.
    pub fn from_coords(row: i64, col: i64) -> Option<Self> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        Self::new(row, col)
    }

    /// Row index (0 is the top).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0 is the left edge).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// The neighbouring cell in `direction`, or `None` past the edge.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Self::from_coords(self.row as i64 + dr, self.col as i64 + dc)
    }

    /// True for the dark squares of the opening fill, which hold Black.
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::from_index(row, col)))
    }

    fn from_index(row: usize, col: usize) -> Self {
        Self {
            row: row as u8,
            col: col as u8,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl TryFrom<RawPosition> for Position {
    type Error = PositionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::from_coords(raw.row, raw.col).ok_or_else(|| {
            PositionError::new(format!("({}, {}) is off the board", raw.row, raw.col))
        })
    }
}

impl From<Position> for RawPosition {
    fn from(pos: Position) -> Self {
        Self {
            row: pos.row as i64,
            col: pos.col as i64,
        }
    }
}

impl TryFrom<(i64, i64)> for Position {
    type Error = PositionError;

    #[track_caller]
    fn try_from((row, col): (i64, i64)) -> Result<Self, Self::Error> {
        Self::from_coords(row, col)
            .ok_or_else(|| PositionError::new(format!("({}, {}) is off the board", row, col)))
    }
}

impl FromStr for Position {
    type Err = PositionError;

    /// Parses `row,col`, tolerating whitespace and surrounding parentheses.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let (row, col) = inner
            .split_once(',')
            .ok_or_else(|| PositionError::new(format!("Expected 'row,col', got '{}'", s)))?;
        let row: i64 = row
            .trim()
            .parse()
            .map_err(|e| PositionError::new(format!("Invalid row '{}': {}", row.trim(), e)))?;
        let col: i64 = col
            .trim()
            .parse()
            .map_err(|e| PositionError::new(format!("Invalid column '{}': {}", col.trim(), e)))?;
        Position::try_from((row, col))
    }
}

/// One of the four orthogonal scan directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 7.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 7.
    Right,
}

impl Direction {
    /// Row and column offset of a single step.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Direction of travel from `from` to `to`, if they share a row or column.
    pub fn between(from: Position, to: Position) -> Option<Self> {
        use std::cmp::Ordering::*;

        match (to.row.cmp(&from.row), to.col.cmp(&from.col)) {
            (Less, Equal) => Some(Direction::Up),
            (Greater, Equal) => Some(Direction::Down),
            (Equal, Less) => Some(Direction::Left),
            (Equal, Greater) => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_bounds() {
        assert!(Position::new(7, 7).is_some());
        assert!(Position::new(8, 0).is_none());
        assert!(Position::new(0, 8).is_none());
    }

    #[test]
    fn test_from_coords_rejects_negative() {
        assert!(Position::from_coords(-1, 3).is_none());
        assert!(Position::from_coords(3, -1).is_none());
        assert_eq!(Position::from_coords(3, 4), Position::new(3, 4));
    }

    #[test]
    fn test_step_stops_at_edge() {
        let corner = Position::new(0, 0).unwrap();
        assert_eq!(corner.step(Direction::Up), None);
        assert_eq!(corner.step(Direction::Left), None);
        assert_eq!(corner.step(Direction::Down), Position::new(1, 0));
        assert_eq!(corner.step(Direction::Right), Position::new(0, 1));
    }

    #[test]
    fn test_parse_row_col() {
        assert_eq!("3,4".parse::<Position>().unwrap(), Position::new(3, 4).unwrap());
        assert_eq!(" ( 0 , 7 ) ".parse::<Position>().unwrap(), Position::new(0, 7).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("34".parse::<Position>().is_err());
        assert!("a,b".parse::<Position>().is_err());
        assert!("8,0".parse::<Position>().is_err());
        assert!("-1,0".parse::<Position>().is_err());
    }

    #[test]
    fn test_display_matches_parse_format() {
        let pos = Position::new(5, 2).unwrap();
        assert_eq!(pos.to_string(), "5,2");
        assert_eq!(pos.to_string().parse::<Position>().unwrap(), pos);
    }

    #[test]
    fn test_all_covers_board_in_row_major_order() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Position::new(0, 0).unwrap());
        assert_eq!(all[9], Position::new(1, 1).unwrap());
        assert_eq!(all[63], Position::new(7, 7).unwrap());
    }

    #[test]
    fn test_direction_between() {
        let from = Position::new(4, 4).unwrap();
        assert_eq!(Direction::between(from, Position::new(0, 4).unwrap()), Some(Direction::Up));
        assert_eq!(Direction::between(from, Position::new(4, 7).unwrap()), Some(Direction::Right));
        assert_eq!(Direction::between(from, Position::new(5, 5).unwrap()), None);
        assert_eq!(Direction::between(from, from), None);
    }
}
