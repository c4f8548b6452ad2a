//! Game scripts and their replay.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_nrow::{Board, BoardConfig, GameStatus, Move, Outcome};
use tracing::{debug, info, instrument, warn};

/// A scripted game: board configuration plus moves in play order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameScript {
    /// Board size and win length.
    #[serde(default)]
    pub board: BoardConfig,

    /// Moves in play order.
    #[serde(default)]
    pub moves: Vec<Move>,
}

impl GameScript {
    /// Creates a script from an already validated configuration.
    pub fn new(board: BoardConfig, moves: Vec<Move>) -> Self {
        Self { board, moves }
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read script {}", path.as_ref().display()))?;
        let script = Self::from_toml(&content)?;
        info!(moves = script.moves.len(), "Script loaded");
        Ok(script)
    }

    /// Parses a script from TOML, validating the board configuration.
    pub fn from_toml(content: &str) -> Result<Self> {
        let script: Self = toml::from_str(content).context("Failed to parse script")?;
        script.board.validate()?;
        Ok(script)
    }
}

/// Parses a move written as `player,x,y`.
pub fn parse_move(s: &str) -> Result<Move, String> {
    let parts = s
        .split(',')
        .map(|part| part.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("Invalid move '{}': {}", s, e))?;
    match parts.as_slice() {
        &[player, x, y] => Ok(Move::new(player, x, y)),
        _ => Err(format!("Invalid move '{}': expected player,x,y", s)),
    }
}

/// Result of replaying a script.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Board size.
    pub size: usize,
    /// Win length.
    pub win_length: usize,
    /// Moves applied before the game stopped.
    pub moves_played: usize,
    /// Winner id, or 0 when nobody won.
    pub winner: u8,
    /// Final game status.
    pub status: GameStatus,
    /// Rendered final board.
    pub board: String,
}

impl Report {
    /// One-line summary of the outcome.
    pub fn summary(&self) -> String {
        match self.status {
            GameStatus::Won(player) => {
                format!("Game won by {} after {} moves", player, self.moves_played)
            }
            GameStatus::Draw => format!("Draw after {} moves", self.moves_played),
            GameStatus::InProgress => {
                format!("No winner yet after {} moves", self.moves_played)
            }
        }
    }
}

/// Plays the script's moves in order until one of them wins.
///
/// Moves after the winning move are skipped. An illegal move stops the
/// replay with the engine's violation list.
#[instrument(skip(script), fields(moves = script.moves.len()))]
pub fn replay(script: &GameScript) -> Result<Report> {
    let mut board = Board::from_config(&script.board);

    for (index, mv) in script.moves.iter().enumerate() {
        let outcome = match board.apply(mv) {
            Ok(outcome) => outcome,
            Err(e) => bail!("Move {} ({}) rejected: {}", index + 1, mv, e),
        };
        debug!(move_number = index + 1, %mv, "Move applied");

        if let Outcome::Winner(player) = outcome {
            let skipped = script.moves.len() - index - 1;
            if skipped > 0 {
                warn!(skipped, "Ignoring moves after the winning move");
            }
            info!(winner = %player, "Replay finished with a winner");
            break;
        }
    }

    Ok(Report {
        size: board.size(),
        win_length: board.win_length(),
        moves_played: board.history().len(),
        winner: board.winner().map_or(0, |p| p.id()),
        status: board.status(),
        board: board.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use strictly_nrow::Player;

    const DIAGONAL_SCRIPT: &str = r#"
[board]
size = 3
win_length = 3

[[moves]]
player = 1
x = 0
y = 0

[[moves]]
player = 2
x = 0
y = 1

[[moves]]
player = 1
x = 1
y = 1

[[moves]]
player = 2
x = 2
y = 1

[[moves]]
player = 1
x = 2
y = 2

[[moves]]
player = 2
x = 2
y = 0
"#;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("1,0,2"), Ok(Move::new(1, 0, 2)));
        assert_eq!(parse_move("2, -1, 10"), Ok(Move::new(2, -1, 10)));
        assert!(parse_move("1,0").is_err());
        assert!(parse_move("a,0,0").is_err());
    }

    #[test]
    fn test_replay_stops_at_win() {
        let script = GameScript::from_toml(DIAGONAL_SCRIPT).unwrap();
        assert_eq!(script.moves.len(), 6);

        let report = replay(&script).unwrap();
        assert_eq!(report.winner, 1);
        assert_eq!(report.moves_played, 5);
        assert_eq!(report.status, GameStatus::Won(Player::One));
        assert_eq!(report.summary(), "Game won by 1 after 5 moves");
    }

    #[test]
    fn test_replay_reports_illegal_move() {
        let script = GameScript::new(
            BoardConfig::new(3, 3).unwrap(),
            vec![Move::new(1, 0, 0), Move::new(1, 5, 0)],
        );
        let err = replay(&script).unwrap_err().to_string();
        assert!(err.starts_with("Move 2"));
        assert!(err.contains("Player 1 has just been. Time for another player!"));
        assert!(err.contains("x_coord: 5 is out of bounds."));
    }

    #[test]
    fn test_replay_without_winner() {
        let script = GameScript::new(BoardConfig::new(4, 4).unwrap(), vec![Move::new(2, 3, 3)]);
        let report = replay(&script).unwrap();
        assert_eq!(report.winner, 0);
        assert_eq!(report.status, GameStatus::InProgress);
        assert_eq!(report.summary(), "No winner yet after 1 moves");
    }

    #[test]
    fn test_script_with_invalid_board_is_rejected() {
        let err = GameScript::from_toml("[board]\nsize = 3\nwin_length = 7\n").unwrap_err();
        assert!(err.to_string().contains("Win length 7 must not exceed board size 3"));
    }

    #[test]
    fn test_script_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DIAGONAL_SCRIPT.as_bytes()).unwrap();
        let script = GameScript::from_file(file.path()).unwrap();
        assert_eq!(script.board, BoardConfig::new(3, 3).unwrap());
    }

    #[test]
    fn test_report_serializes_to_json() {
        let script = GameScript::from_toml(DIAGONAL_SCRIPT).unwrap();
        let report = replay(&script).unwrap();
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["winner"], 1);
        assert_eq!(json["moves_played"], 5);
    }
}
