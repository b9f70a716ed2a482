//! Kōnane rules engine.
//!
//! Kōnane is Hawaiian checkers: two players on an 8×8 board filled with a
//! checkerboard of pieces, each removing one of their own pieces before play,
//! then capturing by orthogonal jumps until someone cannot move.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Cell`], [`Player`], [`Position`], [`Phase`]
//! - **Rules**: pure board functions for setup removal, jump generation and
//!   capture ([`rules`])
//! - **Game**: immutable [`GameState`] snapshots and the transition functions
//!   [`new_game`], [`preview_snapshot`], [`interact`], [`dispatch`]
//! - **Invariants / contracts**: snapshot properties checked after every
//!   transition in debug builds
//! - **Session**: [`GameSession`], the state holder presentation code keeps
//!
//! # Example
//!
//! ```
//! use konane::{Phase, Player, Position, interact, new_game};
//!
//! let pos = |r, c| Position::new(r, c).unwrap();
//!
//! let state = new_game();
//! let state = interact(&state, pos(0, 0)); // Black removes a corner piece
//! let state = interact(&state, pos(0, 1)); // White removes its neighbour
//! assert_eq!(state.phase(), Phase::Playing);
//! assert_eq!(state.current_player(), Player::Black);
//!
//! let state = interact(&state, pos(2, 0)); // select
//! assert_eq!(state.valid_moves(), &[pos(0, 0)]);
//! let state = interact(&state, pos(0, 0)); // jump over 1,0
//! assert!(state.board().is_empty(pos(1, 0)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod phases;
mod position;
mod session;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use phases::Phase;
pub use position::{BOARD_SIZE, Direction, Position};
pub use types::{Board, Cell, Player};

// Crate-level exports - Actions
pub use action::{Action, Interaction, InteractionKind, Move};

// Crate-level exports - Errors
pub use error::{BoardError, PositionError};

// Crate-level exports - Snapshots and transitions
pub use game::{
    GameState, Transition, dispatch, interact, interact_at, new_game, preview_snapshot, start_game,
};

// Crate-level exports - Invariants
pub use invariants::{Invariant, InvariantSet, InvariantViolation, KonaneInvariants};

// Crate-level exports - Session
pub use session::GameSession;
