//! Jump generation.
//!
//! A piece scans each orthogonal direction on its own. Empty cells before
//! the first piece are passed over. The first piece met must belong to the
//! opponent; it becomes the capture. Every empty cell after it is a landing
//! square, up to the next piece or the edge of the board.

use super::super::{Board, Cell, Direction, Player, Position};
use strum::IntoEnumIterator;
use tracing::{instrument, trace};

/// Landing squares reachable by `player`'s piece at `from`.
///
/// Destinations are listed per direction (up, down, left, right) and
/// outward within each direction. An empty result means the piece cannot
/// move. The caller is responsible for `from` holding one of `player`'s
/// pieces.
#[instrument(skip(board))]
pub fn valid_moves(board: &Board, from: Position, player: Player) -> Vec<Position> {
    Direction::iter()
        .flat_map(|direction| landings(board, from, player, direction))
        .collect()
}

/// Landing squares along a single direction.
fn landings(board: &Board, from: Position, player: Player, direction: Direction) -> Vec<Position> {
    let mut found = Vec::new();
    let mut jumped = false;
    let mut cursor = from;

    while let Some(next) = cursor.step(direction) {
        cursor = next;
        match board.get(cursor) {
            Cell::Empty => {
                if jumped {
                    found.push(cursor);
                }
            }
            Cell::Occupied(owner) if owner != player && !jumped => {
                jumped = true;
            }
            Cell::Occupied(_) => break,
        }
    }

    trace!(%from, ?direction, count = found.len(), "Scanned direction");
    found
}

/// Returns true if any of `player`'s pieces has a destination.
///
/// Stops at the first piece that can move.
#[instrument(skip(board))]
pub fn has_legal_move(board: &Board, player: Player) -> bool {
    board
        .positions_of(player)
        .any(|from| !valid_moves(board, from, player).is_empty())
}

/// Every `(from, to)` pair available to `player`, in row-major order of origin.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board, player: Player) -> Vec<(Position, Position)> {
    board
        .positions_of(player)
        .flat_map(|from| {
            valid_moves(board, from, player)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    fn board(diagram: &str) -> Board {
        Board::from_diagram(diagram).unwrap()
    }

    #[test]
    fn test_single_capture_against_edge() {
        let board = board(
            "........
             ........
             ........
             .....BW.
             ........
             ........
             ........
             ........",
        );
        assert_eq!(valid_moves(&board, pos(3, 5), Player::Black), vec![pos(3, 7)]);
    }

    #[test]
    fn test_no_adjacent_opponent_has_no_moves() {
        let board = board(
            "........
             ........
             ........
             ...B....
             ........
             ........
             ........
             ........",
        );
        assert!(valid_moves(&board, pos(3, 3), Player::Black).is_empty());
    }

    #[test]
    fn test_own_piece_blocks_direction() {
        let board = board(
            "........
             ........
             ........
             ...BB...
             ........
             ........
             ........
             ........",
        );
        assert!(valid_moves(&board, pos(3, 3), Player::Black).is_empty());
    }

    #[test]
    fn test_two_opponents_in_a_row_block() {
        let board = board(
            "........
             ........
             ........
             ...BWW..
             ........
             ........
             ........
             ........",
        );
        assert!(valid_moves(&board, pos(3, 3), Player::Black).is_empty());
    }

    #[test]
    fn test_every_empty_after_capture_is_a_landing() {
        let board = board(
            "........
             ........
             ........
             BW......
             ........
             ........
             ........
             ........",
        );
        assert_eq!(
            valid_moves(&board, pos(3, 0), Player::Black),
            vec![pos(3, 2), pos(3, 3), pos(3, 4), pos(3, 5), pos(3, 6), pos(3, 7)]
        );
    }

    #[test]
    fn test_second_piece_after_capture_stops_scan() {
        let board = board(
            "........
             ........
             ........
             BW..W...
             ........
             ........
             ........
             ........",
        );
        assert_eq!(
            valid_moves(&board, pos(3, 0), Player::Black),
            vec![pos(3, 2), pos(3, 3)]
        );
    }

    #[test]
    fn test_gap_before_capture_is_passed_over() {
        let board = board(
            "........
             ........
             ........
             B.W.B...
             ........
             ........
             ........
             ........",
        );
        assert_eq!(valid_moves(&board, pos(3, 0), Player::Black), vec![pos(3, 3)]);
    }

    #[test]
    fn test_directions_are_listed_up_down_left_right() {
        let board = board(
            "........
             ...B....
             ...W....
             .BWBWB..
             ...W....
             ...B....
             ........
             ........",
        );
        // Every direction is capped by a Black piece, so nothing lands.
        assert!(valid_moves(&board, pos(3, 3), Player::Black).is_empty());

        let open = Board::from_diagram(
            "........
             ........
             ...W....
             ..WBW...
             ...W....
             ........
             ........
             ........",
        )
        .unwrap();
        let moves = valid_moves(&open, pos(3, 3), Player::Black);
        assert_eq!(moves.first(), Some(&pos(1, 3)));
        assert_eq!(moves[moves.len() - 1], pos(3, 7));
        assert!(moves.contains(&pos(5, 3)));
        assert!(moves.contains(&pos(3, 1)));
    }

    #[test]
    fn test_opening_board_has_no_moves() {
        let board = Board::new();
        assert!(!has_legal_move(&board, Player::Black));
        assert!(!has_legal_move(&board, Player::White));
        assert!(legal_moves(&board, Player::Black).is_empty());
    }

    #[test]
    fn test_legal_moves_after_corner_removals() {
        let mut board = Board::new();
        board.set(pos(0, 0), Cell::Empty);
        board.set(pos(0, 1), Cell::Empty);

        let moves = legal_moves(&board, Player::Black);
        assert_eq!(moves, vec![(pos(2, 0), pos(0, 0))]);
        assert!(has_legal_move(&board, Player::Black));
    }
}
