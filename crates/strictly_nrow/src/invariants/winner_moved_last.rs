//! A recorded winner is the player who made the last move.

use super::Invariant;
use crate::Board;

/// Invariant: The winner, if any, made the most recent move.
///
/// Boards stop accepting moves once won, so the winning move is always the
/// last one in the history.
pub struct WinnerMovedLastInvariant;

impl Invariant<Board> for WinnerMovedLastInvariant {
    fn holds(board: &Board) -> bool {
        match board.winner() {
            Some(winner) => board.last_player() == Some(winner),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Winner made the most recent move"
    }
}
