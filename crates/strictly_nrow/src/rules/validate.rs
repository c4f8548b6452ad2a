//! Move validation.
//!
//! Every applicable rule is reported, in a fixed order that callers rely on
//! when formatting messages: player id, consecutive player, x bounds,
//! y bounds, occupied cell.

use crate::{Board, Player, Violation};
use tracing::{debug, instrument};

/// Checks a proposed move against the board without changing it.
///
/// Returns every violated rule; an empty list means the move is legal.
/// The occupied check only runs when both coordinates are on the board.
#[instrument(skip(board), fields(last_player = ?board.last_player()))]
pub fn check_move(board: &Board, player: i64, x: i64, y: i64) -> Vec<Violation> {
    let mut violations = Vec::new();

    if Player::from_id(player).is_none() {
        violations.push(Violation::InvalidPlayer(player));
    }

    if board
        .last_player()
        .is_some_and(|last| i64::from(last.id()) == player)
    {
        violations.push(Violation::ConsecutivePlayer(player));
    }

    let row = board.coordinate(x);
    if row.is_none() {
        violations.push(Violation::XOutOfBounds(x));
    }

    let col = board.coordinate(y);
    if col.is_none() {
        violations.push(Violation::YOutOfBounds(y));
    }

    if let (Some(row), Some(col)) = (row, col)
        && board.get(row, col).is_some_and(|cell| !cell.is_empty())
    {
        violations.push(Violation::Occupied { x: row, y: col });
    }

    debug!(count = violations.len(), "Move validated");
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_legal_first_move() {
        let board = Board::new(3, 3).unwrap();
        assert!(check_move(&board, 1, 1, 1).is_empty());
        assert!(check_move(&board, 2, 0, 2).is_empty());
    }

    #[test]
    fn test_occupied_cell() {
        let mut board = Board::new(3, 3).unwrap();
        board.set(1, 1, Cell::Owned(Player::One));
        assert_eq!(
            check_move(&board, 2, 1, 1),
            vec![Violation::Occupied { x: 1, y: 1 }]
        );
    }

    #[test]
    fn test_out_of_bounds_skips_occupied_check() {
        let mut board = Board::new(3, 3).unwrap();
        board.set(0, 0, Cell::Owned(Player::One));
        assert_eq!(
            check_move(&board, 2, -1, 0),
            vec![Violation::XOutOfBounds(-1)]
        );
        assert_eq!(
            check_move(&board, 2, 0, 3),
            vec![Violation::YOutOfBounds(3)]
        );
    }

    #[test]
    fn test_invalid_player_ids() {
        let board = Board::new(3, 3).unwrap();
        for id in [0, 3, 4, -10, i64::MAX] {
            assert_eq!(check_move(&board, id, 0, 0), vec![Violation::InvalidPlayer(id)]);
        }
    }

    #[test]
    fn test_extreme_coordinates() {
        let board = Board::new(3, 3).unwrap();
        assert_eq!(
            check_move(&board, 1, i64::MIN, i64::MAX),
            vec![
                Violation::XOutOfBounds(i64::MIN),
                Violation::YOutOfBounds(i64::MAX),
            ]
        );
    }
}
