//! Win detection anchored at the most recent move.
//!
//! Only runs that pass through the given cell are considered, so a call
//! answers "did this move win?" rather than "is there a run anywhere?".

use crate::{Board, Cell, Player};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// One of the four undirected lines through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, derive_more::Display)]
pub enum Axis {
    /// Along a row (varying y).
    #[display("horizontal")]
    Horizontal,
    /// Along a column (varying x).
    #[display("vertical")]
    Vertical,
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Axis {
    /// Unit step `(dx, dy)` in the positive direction of this axis.
    ///
    /// The negative direction is the same step negated.
    pub fn step(self) -> (i64, i64) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// Counts owned cells walking away from `(x, y)`, excluding the start.
///
/// Stops at the edge of the board or the first cell not owned by `owner`.
/// A run can never be longer than the board, so at most `size - 1` steps
/// are taken whatever the input.
fn walk(board: &Board, owner: Player, x: usize, y: usize, (dx, dy): (i64, i64)) -> usize {
    let (mut cx, mut cy) = (x as i64, y as i64);
    let mut count = 0;
    for _ in 1..board.size() {
        cx += dx;
        cy += dy;
        match board.lookup(cx, cy) {
            Some(Cell::Owned(p)) if p == owner => count += 1,
            _ => break,
        }
    }
    count
}

/// Length of the contiguous run through `(x, y)` along `axis`.
///
/// The run is owned by whoever owns `(x, y)`; an empty or out-of-bounds
/// anchor has no run and yields 0.
pub fn run_length(board: &Board, x: usize, y: usize, axis: Axis) -> usize {
    let Some(owner) = board.get(x, y).and_then(Cell::owner) else {
        return 0;
    };
    let (dx, dy) = axis.step();
    1 + walk(board, owner, x, y, (dx, dy)) + walk(board, owner, x, y, (-dx, -dy))
}

/// Returns the owner of `(x, y)` if the cell sits on a run of at least
/// `win_length` of their marks.
#[instrument(skip(board), fields(win_length = board.win_length()))]
pub fn find_winner(board: &Board, x: usize, y: usize) -> Option<Player> {
    let owner = board.get(x, y)?.owner()?;
    let winning_axis = Axis::iter().find(|&axis| {
        let length = run_length(board, x, y, axis);
        debug!(%axis, length, "Measured run");
        length >= board.win_length()
    })?;
    debug!(%owner, axis = %winning_axis, "Winning run found");
    Some(owner)
}
