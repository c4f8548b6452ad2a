//! nrow - replay N-in-a-row games
//!
//! Non-interactive driver for the strictly_nrow engine: plays a scripted or
//! command-line move list and reports the final board and winner.

#![warn(missing_docs)]

mod cli;
mod script;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use script::GameScript;
use strictly_nrow::BoardConfig;
use tracing::{debug, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed arguments");

    let script = match cli.command {
        Command::Replay { script } => GameScript::from_file(script)?,
        Command::Play {
            size,
            win_length,
            moves,
        } => GameScript::new(BoardConfig::new(size, win_length)?, moves),
    };

    run(&script, cli.json)
}

/// Replays the script and prints the report.
#[instrument(skip(script))]
fn run(script: &GameScript, json: bool) -> Result<()> {
    let report = script::replay(script)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.board);
        println!();
        println!("{}", report.summary());
    }

    Ok(())
}
