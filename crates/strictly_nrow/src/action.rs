//! First-class action types for N-in-a-row.
//!
//! A [`Move`] is what a caller proposes; a [`Placement`] is what the board
//! recorded after the move passed validation.

use super::Player;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A proposed move: raw player id and coordinates, not yet validated.
///
/// Fields are signed so that negative or oversized input reaches the
/// validator and gets reported instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// Raw id of the player making the move.
    pub player: i64,
    /// Row coordinate.
    pub x: i64,
    /// Column coordinate.
    pub y: i64,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {} -> ({}, {})", self.player, self.x, self.y)
    }
}

/// A move that has been applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Placement {
    /// The player who placed the mark.
    pub player: Player,
    /// Row coordinate.
    pub x: usize,
    /// Column coordinate.
    pub y: usize,
}

/// A single rule broken by a proposed move.
///
/// The display strings are part of the public contract; callers match on
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Violation {
    /// The player id is not one of the known players.
    #[display("Invalid Player index. Must be in [1, 2]")]
    InvalidPlayer(i64),

    /// The same player tried to move twice in a row.
    #[display("Player {} has just been. Time for another player!", _0)]
    ConsecutivePlayer(i64),

    /// Row coordinate outside the board.
    #[display("x_coord: {} is out of bounds.", _0)]
    XOutOfBounds(i64),

    /// Column coordinate outside the board.
    #[display("y_coord: {} is out of bounds.", _0)]
    YOutOfBounds(i64),

    /// The target cell already has an owner.
    #[display("Position: {}, {} is already taken!", x, y)]
    Occupied {
        /// Row coordinate.
        x: usize,
        /// Column coordinate.
        y: usize,
    },
}

/// Ordered list of violations reported for one move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
pub struct Violations(Vec<Violation>);

impl Violations {
    /// Returns the violations in reporting order.
    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the move broke no rule.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Human-readable messages, one per violation.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Consumes the wrapper, returning the inner list.
    pub fn into_inner(self) -> Vec<Violation> {
        self.0
    }
}

impl std::fmt::Display for Violations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.messages().join(","))
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The move broke one or more rules; nothing was changed.
    #[display("The move is illegal : {}", _0)]
    Illegal(Violations),

    /// The board already has a winner.
    #[display("Game is already over, won by {}", winner)]
    GameOver {
        /// The player who won.
        winner: Player,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Returns the violations if this error is a rule failure.
    pub fn violations(&self) -> Option<&Violations> {
        match self {
            MoveError::Illegal(violations) => Some(violations),
            _ => None,
        }
    }
}
