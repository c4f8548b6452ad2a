//! Command-line interface for nrow.

use crate::script::parse_move;
use clap::{Parser, Subcommand};
use strictly_nrow::Move;

/// nrow - replay N-in-a-row games against the strictly_nrow engine
#[derive(Parser, Debug)]
#[command(name = "nrow")]
#[command(about = "Replay N-in-a-row games and report the winner", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Print the report as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a game script (TOML with a [board] table and [[moves]] entries)
    Replay {
        /// Path to the game script
        script: std::path::PathBuf,
    },

    /// Play the moves given on the command line
    Play {
        /// Width and height of the board
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// Consecutive marks needed to win
        #[arg(short, long, default_value = "3")]
        win_length: usize,

        /// Moves as `player,x,y` (for example `1,0,0 2,1,1`)
        #[arg(value_parser = parse_move, allow_hyphen_values = true)]
        moves: Vec<Move>,
    },
}
