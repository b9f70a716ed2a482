//! Core domain types for Kōnane.

use crate::error::BoardError;
use crate::position::{BOARD_SIZE, Position};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the two sides.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, strum::EnumIter,
)]
pub enum Player {
    /// Black owns the dark squares of the opening fill and always moves first.
    Black,
    /// White owns the light squares.
    White,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Single-character symbol used in board diagrams.
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'B',
            Player::White => 'W',
        }
    }
}

/// A cell on the Kōnane board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's piece.
    Occupied(Player),
}

impl Cell {
    /// Returns the owner of the piece in this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// True if the cell holds a piece belonging to `player`.
    pub fn is_owned_by(self, player: Player) -> bool {
        self == Cell::Occupied(player)
    }
}

/// 8×8 Kōnane board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the opening board: Black on every square where `row + col` is
    /// even, White everywhere else, no empty cells.
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for pos in Position::all() {
            let owner = if pos.is_dark() { Player::Black } else { Player::White };
            cells[pos.row()][pos.col()] = Cell::Occupied(owner);
        }
        Self { cells }
    }

    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Sets the cell at the given position.
    ///
    /// Crate-private: only the setup and move rules write to a board.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row()][pos.col()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Number of pieces `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.positions_of(player).count()
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        Position::all().filter(|pos| self.is_empty(*pos)).count()
    }

    /// Positions of every piece owned by `player`, in row-major order.
    pub fn positions_of(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(move |pos| self.get(*pos).is_owned_by(player))
    }

    /// Parses a diagram in the format produced by `Display`.
    ///
    /// Eight non-blank lines of eight symbols each: `B` for Black, `W` for
    /// White, `.` for empty. Whitespace inside a line is ignored.
    #[instrument(skip(diagram))]
    pub fn from_diagram(diagram: &str) -> Result<Self, BoardError> {
        let rows: Vec<Vec<char>> = diagram
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(BoardError::new(format!(
                "Expected {} rows, found {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut board = Self::empty();
        for (row, symbols) in rows.iter().enumerate() {
            if symbols.len() != BOARD_SIZE {
                return Err(BoardError::new(format!(
                    "Row {} has {} cells, expected {}",
                    row,
                    symbols.len(),
                    BOARD_SIZE
                )));
            }
            for (col, symbol) in symbols.iter().enumerate() {
                let cell = match symbol.to_ascii_uppercase() {
                    '.' => Cell::Empty,
                    other => Player::iter()
                        .find(|player| player.symbol() == other)
                        .map(Cell::Occupied)
                        .ok_or_else(|| {
                            BoardError::new(format!(
                                "Unknown symbol '{}' at row {}, column {}",
                                other, row, col
                            ))
                        })?,
                };
                if let Some(pos) = Position::new(row, col) {
                    board.set(pos, cell);
                }
            }
        }

        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            let line: String = row
                .iter()
                .map(|cell| cell.player().map_or('.', Player::symbol))
                .collect();
            if index + 1 < BOARD_SIZE {
                writeln!(f, "{}", line)?;
            } else {
                write!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}
