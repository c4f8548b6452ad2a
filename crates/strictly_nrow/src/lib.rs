//! Strictly N-in-a-row - a generalized tic-tac-toe engine
//!
//! Two players alternately place marks on an N×N board. A player wins when
//! their move completes a straight run (row, column or diagonal) of at least
//! `win_length` of their marks.
//!
//! # Architecture
//!
//! - **Board**: grid state, move validation and application
//! - **Rules**: pure validation, win and draw checks
//! - **Contracts**: pre/postconditions wrapped around every move
//! - **Config**: board size and win length, loadable from TOML
//!
//! # Example
//!
//! ```
//! use strictly_nrow::{Board, Outcome, Player};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut board = Board::new(3, 3)?;
//! for (player, x, y) in [(1, 0, 0), (2, 0, 1), (1, 1, 1), (2, 2, 1)] {
//!     board.apply_move(player, x, y)?;
//! }
//! assert_eq!(board.apply_move(1, 2, 2)?, Outcome::Winner(Player::One));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod contracts;
pub mod invariants;
pub mod rules;
mod types;

// Crate-level exports - Engine
pub use board::Board;

// Crate-level exports - Configuration
pub use config::{BoardConfig, ConfigError, ConfigErrorKind, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

// Crate-level exports - Moves and errors
pub use action::{Move, MoveError, Placement, Violation, Violations};

// Crate-level exports - Contracts
pub use contracts::{Contract, MoveContract};

// Crate-level exports - Domain types
pub use types::{Cell, GameStatus, Outcome, Player};
