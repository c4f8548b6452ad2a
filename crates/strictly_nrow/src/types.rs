//! Core domain types for N-in-a-row.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Player in the game.
///
/// Players are identified on the wire by their numeric id (1 or 2).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum Player {
    /// Player 1.
    #[display("1")]
    One,
    /// Player 2.
    #[display("2")]
    Two,
}

impl Player {
    /// Returns the numeric id of this player.
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// All valid player ids, in order.
    pub fn ids() -> Vec<u8> {
        Player::iter().map(Player::id).collect()
    }

    /// Looks up the player for a raw id, if it names one.
    pub fn from_id(id: i64) -> Option<Self> {
        Player::iter().find(|p| i64::from(p.id()) == id)
    }
}

impl TryFrom<i64> for Player {
    type Error = i64;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        Player::from_id(id).ok_or(id)
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell owned by a player.
    Owned(Player),
}

impl Cell {
    /// Returns the owner of this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Owned(player) => Some(player),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Result of applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The move did not complete a winning run.
    NoWinner,
    /// The move completed a winning run for this player.
    Winner(Player),
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::NoWinner => None,
        }
    }

    /// Numeric form of the outcome: the winner's id, or 0 when nobody has won.
    pub fn winner_id(&self) -> u8 {
        self.winner().map_or(0, Player::id)
    }
}

impl From<Option<Player>> for Outcome {
    fn from(winner: Option<Player>) -> Self {
        winner.map_or(Outcome::NoWinner, Outcome::Winner)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Game won by {}", player),
            Outcome::NoWinner => write!(f, "No winner yet"),
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Board is full and nobody won.
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_ids() {
        assert_eq!(Player::ids(), vec![1, 2]);
        assert_eq!(Player::One.id(), 1);
        assert_eq!(Player::Two.id(), 2);
    }

    #[test]
    fn test_player_from_raw_id() {
        assert_eq!(Player::try_from(1), Ok(Player::One));
        assert_eq!(Player::try_from(2), Ok(Player::Two));
        assert_eq!(Player::try_from(0), Err(0));
        assert_eq!(Player::try_from(-10), Err(-10));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
    }

    #[test]
    fn test_outcome_sentinel() {
        assert_eq!(Outcome::NoWinner.winner_id(), 0);
        assert_eq!(Outcome::Winner(Player::Two).winner_id(), 2);
        assert_eq!(Outcome::from(None), Outcome::NoWinner);
        assert_eq!(Outcome::from(Some(Player::One)), Outcome::Winner(Player::One));
    }
}
