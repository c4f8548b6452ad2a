//! The N-in-a-row board engine.

use crate::contracts::{Contract, MoveContract};
use crate::{
    BoardConfig, Cell, ConfigError, GameStatus, Move, MoveError, Outcome, Placement, Player,
    Violation, rules,
};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Square board of `size × size` cells with a configurable win length.
///
/// Coordinates are `(x, y)` with `x` the row and `y` the column, both in
/// `[0, size)`. The board is mutated only through [`Board::apply_move`]
/// (or [`Board::apply`]) and [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    win_length: usize,
    /// Cells in row-major order.
    cells: Vec<Cell>,
    last_player: Option<Player>,
    history: Vec<Placement>,
    winner: Option<Player>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `size` is below 3 or above
    /// [`MAX_BOARD_SIZE`](crate::MAX_BOARD_SIZE), `win_length` is 0, or
    /// `win_length` exceeds `size`.
    #[instrument]
    pub fn new(size: usize, win_length: usize) -> Result<Self, ConfigError> {
        let config = BoardConfig::new(size, win_length)?;
        Ok(Self::from_config(&config))
    }

    /// Creates an empty board from an already validated configuration.
    #[instrument]
    pub fn from_config(config: &BoardConfig) -> Self {
        let size = *config.size();
        Self {
            size,
            win_length: *config.win_length(),
            cells: vec![Cell::Empty; size * size],
            last_player: None,
            history: Vec::new(),
            winner: None,
        }
    }

    /// Clears every cell, the last player, history and winner.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.last_player = None;
        self.history.clear();
        self.winner = None;
        debug!("Board reset");
    }

    /// Width and height of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of consecutive marks needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// The configuration this board was built from.
    pub fn config(&self) -> BoardConfig {
        BoardConfig::from_parts(self.size, self.win_length)
    }

    /// Gets the cell at `(x, y)`, or `None` off the board.
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x < self.size && y < self.size {
            self.cells.get(x * self.size + y).copied()
        } else {
            None
        }
    }

    /// Gets the cell at signed coordinates, or `None` off the board.
    pub(crate) fn lookup(&self, x: i64, y: i64) -> Option<Cell> {
        self.get(self.coordinate(x)?, self.coordinate(y)?)
    }

    /// Converts a raw coordinate into an index, if it lies on the board.
    pub(crate) fn coordinate(&self, value: i64) -> Option<usize> {
        usize::try_from(value).ok().filter(|&v| v < self.size)
    }

    /// Overwrites a cell without any rule checks.
    pub(crate) fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.size && y < self.size {
            self.cells[x * self.size + y] = cell;
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the rows of the board.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// The player who made the most recent move.
    pub fn last_player(&self) -> Option<Player> {
        self.last_player
    }

    /// Moves applied since construction or the last reset, in order.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// The player whose move completed a winning run, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(player) => GameStatus::Won(player),
            None if rules::is_full(self) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Lists every rule the move would break, in reporting order.
    ///
    /// Never changes the board.
    pub fn validate_move(&self, player: i64, x: i64, y: i64) -> Vec<Violation> {
        rules::check_move(self, player, x, y)
    }

    /// Validates and applies a move, then checks whether it won.
    ///
    /// # Errors
    ///
    /// - [`MoveError::Illegal`] with the full violation list if the move
    ///   breaks any rule.
    /// - [`MoveError::GameOver`] if the board already has a winner.
    ///
    /// The board is untouched when either is returned.
    pub fn apply_move(&mut self, player: i64, x: i64, y: i64) -> Result<Outcome, MoveError> {
        self.apply(&Move::new(player, x, y))
    }

    /// Applies a proposed move. See [`Board::apply_move`].
    #[instrument(skip(self), fields(size = self.size, win_length = self.win_length))]
    pub fn apply(&mut self, action: &Move) -> Result<Outcome, MoveError> {
        if let Some(winner) = self.winner {
            warn!(%winner, "Move after game over");
            return Err(MoveError::GameOver { winner });
        }

        MoveContract::pre(self, action).inspect_err(|e| warn!(error = %e, "Move rejected"))?;
        let placement = self.resolve(action).ok_or_else(|| {
            MoveError::InvariantViolation(format!("validated move {} is not on the board", action))
        })?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.set(placement.x, placement.y, Cell::Owned(placement.player));
        self.last_player = Some(placement.player);
        self.history.push(placement);
        self.winner = rules::find_winner(self, placement.x, placement.y);
        debug!(board = %self, "Board after move");

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        let outcome = Outcome::from(self.winner);
        if let Outcome::Winner(player) = outcome {
            info!(winner = %player, moves = self.history.len(), "Game won");
        }
        Ok(outcome)
    }

    /// Maps a raw move onto a typed placement, if it names a player and a cell.
    fn resolve(&self, action: &Move) -> Option<Placement> {
        Some(Placement::new(
            Player::from_id(action.player)?,
            self.coordinate(action.x)?,
            self.coordinate(action.y)?,
        ))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let divider = vec!["-"; self.size].join("+");
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "{}", divider)?;
            }
            let line = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".".to_string(),
                    Cell::Owned(player) => player.to_string(),
                })
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
