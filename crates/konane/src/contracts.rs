//! Contract-based validation for Kōnane transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} interaction {Q}

use super::game::{GameState, Transition};
use super::invariants::{InvariantSet, InvariantViolation, KonaneInvariants};
use derive_more::{Display, Error};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state)} - must hold before the transition
/// - Postcondition: {Q(before, after)} - must hold after it
pub trait Contract<S, T> {
    /// Checks preconditions before the transition.
    fn pre(state: &S) -> Result<(), ContractViolation>;

    /// Checks postconditions after the transition.
    fn post(before: &S, after: &T) -> Result<(), ContractViolation>;
}

/// A contract check failed.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Contract violation: {}", message)]
pub struct ContractViolation {
    /// What went wrong.
    pub message: String,
}

impl ContractViolation {
    /// Creates a new contract violation.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn from_invariants(context: &str, violations: &[InvariantViolation]) -> Self {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Self::new(format!("{}: {}", context, descriptions))
    }
}

// ─────────────────────────────────────────────────────────────
//  Transition Contract
// ─────────────────────────────────────────────────────────────

/// Contract for a single interaction.
///
/// Preconditions:
/// - The prior snapshot satisfies every invariant
///
/// Postconditions:
/// - The new snapshot satisfies every invariant
/// - The phase did not move backwards
/// - The board changed only for removals and moves
pub struct TransitionContract;

impl Contract<GameState, Transition> for TransitionContract {
    fn pre(state: &GameState) -> Result<(), ContractViolation> {
        KonaneInvariants::check_all(state)
            .map_err(|violations| ContractViolation::from_invariants("Precondition failed", &violations))
    }

    fn post(before: &GameState, after: &Transition) -> Result<(), ContractViolation> {
        KonaneInvariants::check_all(&after.state)
            .map_err(|violations| ContractViolation::from_invariants("Postcondition failed", &violations))?;

        if after.state.phase() < before.phase() {
            return Err(ContractViolation::new(format!(
                "Phase regressed from {} to {}",
                before.phase(),
                after.state.phase()
            )));
        }

        if !after.kind.changes_board() && after.state.board() != before.board() {
            return Err(ContractViolation::new(format!(
                "Board changed on a {} interaction",
                after.kind
            )));
        }

        Ok(())
    }
}

impl TransitionContract {
    /// Checks the postcondition of a transition whose precondition held.
    ///
    /// Snapshots that did not satisfy the invariants to begin with (for
    /// example, hand-edited deserialised ones) are not held to the
    /// postcondition. Violations are logged and trip a debug assertion.
    #[instrument(skip_all, fields(kind = %transition.kind))]
    pub fn verify(before: &GameState, transition: &Transition) {
        if Self::pre(before).is_err() {
            return;
        }
        if let Err(violation) = Self::post(before, transition) {
            warn!(%violation, "Transition broke a game invariant");
            debug_assert!(false, "{}", violation);
        }
    }
}
