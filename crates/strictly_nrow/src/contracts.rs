//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}.

use crate::invariants::{BoardInvariants, InvariantSet};
use crate::{Board, Move, MoveError, Violations, rules};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Contract for move actions.
///
/// Preconditions:
/// - The move breaks none of the validation rules
///
/// Postconditions:
/// - Exactly one placement was added to the history
/// - All [`BoardInvariants`] hold
pub struct MoveContract;

impl Contract<Board, Move> for MoveContract {
    #[instrument(skip(board))]
    fn pre(board: &Board, action: &Move) -> Result<(), MoveError> {
        let violations = rules::check_move(board, action.player, action.x, action.y);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(MoveError::Illegal(Violations::from(violations)))
        }
    }

    #[instrument(skip_all)]
    fn post(before: &Board, after: &Board) -> Result<(), MoveError> {
        if after.history().len() != before.history().len() + 1 {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "History did not grow by one placement"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history did not grow by one placement".to_string(),
            ));
        }

        BoardInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Board invariants violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player, Violation};

    #[test]
    fn test_precondition_legal_move() {
        let board = Board::new(3, 3).unwrap();
        assert!(MoveContract::pre(&board, &Move::new(1, 1, 1)).is_ok());
    }

    #[test]
    fn test_precondition_reports_all_violations() {
        let mut board = Board::new(3, 3).unwrap();
        board.apply_move(2, 1, 1).unwrap();

        let err = MoveContract::pre(&board, &Move::new(2, 3, -1)).unwrap_err();
        assert_eq!(
            err,
            MoveError::Illegal(Violations::from(vec![
                Violation::ConsecutivePlayer(2),
                Violation::XOutOfBounds(3),
                Violation::YOutOfBounds(-1),
            ]))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = Board::new(3, 3).unwrap();
        let mut after = before.clone();
        after.apply_move(1, 0, 2).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_missing_placement() {
        let before = Board::new(3, 3).unwrap();
        let after = before.clone();
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = Board::new(3, 3).unwrap();
        let mut after = before.clone();
        after.apply_move(1, 0, 2).unwrap();
        after.set(2, 2, Cell::Owned(Player::Two));

        let err = MoveContract::post(&before, &after).unwrap_err();
        assert!(err.to_string().contains("monotonic"));
    }
}
