//! Tic-tac-toe - unified CLI

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tictactoe_tui::{App, Cli, Command, MatchConfig, PlayerArgs, parse_moves, run_script, ui};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play { players, log_file } => run_play(&players, &log_file),
        Command::Script {
            players,
            moves,
            json,
        } => run_script_mode(&players, &moves, json),
    }
}

/// Runs the interactive board. Logs go to a file so they don't draw over the TUI.
fn run_play(players: &PlayerArgs, log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();

    let config = players.resolve()?;
    info!(
        player1 = %config.player1_name(),
        player2 = %config.player2_name(),
        "Starting tic-tac-toe TUI"
    );
    let app = App::new(config)?;

    let mut terminal = ratatui::init();
    let res = run_app(&mut terminal, app);
    ratatui::restore();

    if let Err(e) = &res {
        error!(error = %e, "TUI exited with error");
    }
    res
}

#[instrument(skip_all)]
fn run_app(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if app.should_quit() {
            let scores = app.game().scores();
            info!(%scores, "Session ended");
            return Ok(());
        }
    }
}

/// Plays a move list without a terminal UI.
fn run_script_mode(players: &PlayerArgs, moves: &[String], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config: MatchConfig = players.resolve()?;
    let moves = parse_moves(moves)?;
    let report = run_script(&config, &moves)?;

    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        println!("{}", report);
    }
    Ok(())
}
