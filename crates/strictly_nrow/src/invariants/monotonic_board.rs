//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, Cell};

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the history onto an empty grid must only ever fill empty
/// cells, and must reproduce the current grid exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<Board> for MonotonicBoardInvariant {
    fn holds(board: &Board) -> bool {
        let size = board.size();
        let mut reconstructed = vec![Cell::Empty; size * size];

        for placement in board.history() {
            if placement.x >= size || placement.y >= size {
                return false;
            }
            let slot = &mut reconstructed[placement.x * size + placement.y];
            if !slot.is_empty() {
                return false;
            }
            *slot = Cell::Owned(placement.player);
        }

        reconstructed == board.cells()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
