//! First-class invariants for the board.
//!
//! Invariants are logical properties that must hold after every move.
//! They are testable independently and checked by [`crate::MoveContract`]
//! in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = <(I1, I2) as InvariantSet<S>>::check_all(state)
            .err()
            .unwrap_or_default();

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod alternating_turn;
pub mod monotonic_board;
pub mod winner_moved_last;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use winner_moved_last::WinnerMovedLastInvariant;

/// All board invariants as a composable set.
pub type BoardInvariants = (
    MonotonicBoardInvariant,
    AlternatingTurnInvariant,
    WinnerMovedLastInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell, Player};

    #[test]
    fn test_invariant_set_holds_for_empty_board() {
        let board = Board::new(3, 3).unwrap();
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut board = Board::new(4, 3).unwrap();
        for (player, x, y) in [(2, 0, 0), (1, 3, 3), (2, 1, 2)] {
            board.apply_move(player, x, y).unwrap();
        }
        assert!(BoardInvariants::check_all(&board).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut board = Board::new(3, 3).unwrap();
        board.apply_move(1, 1, 1).unwrap();

        // Corrupt the board behind the engine's back
        board.set(0, 0, Cell::Owned(Player::Two));

        let violations = BoardInvariants::check_all(&board).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(MonotonicBoardInvariant::description())]
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let board = Board::new(3, 3).unwrap();

        type TwoInvariants = (MonotonicBoardInvariant, AlternatingTurnInvariant);
        assert!(TwoInvariants::check_all(&board).is_ok());
    }
}
