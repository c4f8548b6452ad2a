//! Alternating turn invariant: nobody moves twice in a row.

use super::Invariant;
use crate::Board;

/// Invariant: Players alternate turns.
///
/// Either player may open, but no two consecutive history entries share a
/// player, and the board's last player is the author of the last entry.
pub struct AlternatingTurnInvariant;

impl Invariant<Board> for AlternatingTurnInvariant {
    fn holds(board: &Board) -> bool {
        let history = board.history();

        if history
            .windows(2)
            .any(|pair| pair[0].player == pair[1].player)
        {
            return false;
        }

        board.last_player() == history.last().map(|placement| placement.player)
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}
