//! Game rules for N-in-a-row.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from board storage so that contracts and callers
//! can compose them without mutating anything.

pub mod draw;
pub mod validate;
pub mod win;

pub use draw::is_full;
pub use validate::check_move;
pub use win::{Axis, find_winner, run_length};
