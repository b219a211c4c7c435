//! Command-line interface for tictactoe.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{ConfigError, MatchConfig};

/// Two-player tic-tac-toe with a running score
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with scores kept across rounds", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        #[command(flatten)]
        players: PlayerArgs,

        /// File that receives log output while the TUI owns the terminal
        #[arg(long, default_value = "tictactoe.log")]
        log_file: PathBuf,
    },

    /// Play a fixed list of moves and print the result
    Script {
        #[command(flatten)]
        players: PlayerArgs,

        /// Comma-separated moves: indices 0-8 or names like "center"
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Where player names come from.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayerArgs {
    /// Path to a TOML match config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name for player 1 (X), overrides the config file
    #[arg(long)]
    pub player1: Option<String>,

    /// Name for player 2 (O), overrides the config file
    #[arg(long)]
    pub player2: Option<String>,
}

impl PlayerArgs {
    /// Loads the config file, if any, and applies name overrides.
    pub fn resolve(&self) -> Result<MatchConfig, ConfigError> {
        Ok(MatchConfig::load(self.config.as_deref())?
            .with_overrides(self.player1.clone(), self.player2.clone()))
    }
}
