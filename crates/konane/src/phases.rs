//! Game phase progression.

use serde::{Deserialize, Serialize};

/// Phase of a Kōnane game.
///
/// Ordered so that `Setup < Playing < Finished`; a game only ever moves
/// forward through this order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
pub enum Phase {
    /// Each player removes one of their own pieces.
    Setup,
    /// Players alternate jump moves.
    Playing,
    /// The player to move had no legal jump.
    Finished,
}

impl Phase {
    /// Returns true once the game has ended.
    pub fn is_over(self) -> bool {
        matches!(self, Phase::Finished)
    }
}
