//! Terminal front-end and scripted runner for [`tictactoe_core`].
//!
//! The `tictactoe` binary has two modes: `play` opens an interactive board
//! in the terminal, `script` plays a move list and prints the outcome.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod script;
pub mod ui;

pub use app::App;
pub use cli::{Cli, Command, PlayerArgs};
pub use config::{ConfigError, MatchConfig};
pub use input::Action;
pub use script::{RoundSummary, ScriptReport, parse_move, parse_moves, run_script};
