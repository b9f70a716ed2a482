//! Game rules for Kōnane.
//!
//! Pure functions over boards. Rules are separated from the snapshot type
//! so the transition functions and the invariants can share them.

pub mod capture;
pub mod jumps;
pub mod setup;

pub use capture::apply_move;
pub use jumps::{has_legal_move, legal_moves, valid_moves};
pub use setup::{REMOVALS_PER_GAME, after_removal, remove_piece};
