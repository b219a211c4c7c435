//! Non-interactive runner: plays a list of moves and reports the session.
//!
//! Each decided round is recorded and the board is cleared before the next
//! move, so one move list can span several rounds.

use std::fmt;

use anyhow::{Context, bail};
use serde::Serialize;
use tictactoe_core::{Board, MatchController, MatchError, Position, Scores};
use tracing::{debug, info, instrument, warn};

use crate::config::MatchConfig;

/// Parses a move given as a raw index or a cell label.
///
/// Numeric input is passed through unchecked so that out-of-range indices
/// reach the match and are reported as rejected moves. Labels such as
/// `center` or `top-left` are matched case-insensitively.
pub fn parse_move(input: &str) -> anyhow::Result<usize> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        bail!("Empty move");
    }
    if let Ok(index) = trimmed.parse::<usize>() {
        return Ok(index);
    }
    Position::from_label(trimmed)
        .map(Position::to_index)
        .with_context(|| format!("Unknown move '{}': use 0-8 or a cell name like 'center'", trimmed))
}

/// Parses every move, failing on the first bad one.
pub fn parse_moves<S: AsRef<str>>(inputs: &[S]) -> anyhow::Result<Vec<usize>> {
    inputs
        .iter()
        .enumerate()
        .map(|(i, input)| {
            parse_move(input.as_ref()).with_context(|| format!("Move #{} is invalid", i + 1))
        })
        .collect()
}

/// One decided round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    /// 1-based round number.
    pub round: u32,
    /// Winner's name, `None` for a tie.
    pub winner: Option<String>,
    /// Human-readable result.
    pub message: String,
    /// Cells played in order.
    pub moves: Vec<usize>,
}

/// What a scripted session produced.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptReport {
    /// Player names in seat order.
    pub players: [String; 2],
    /// Rounds that reached a result.
    pub rounds: Vec<RoundSummary>,
    /// Moves that were out of range, on taken cells, or otherwise ignored.
    pub rejected: Vec<usize>,
    /// Moves of the round still in progress when the script ended.
    pub unfinished: Vec<usize>,
    /// Board as left by the last move.
    pub board: Board,
    /// Final tally.
    pub scores: Scores,
}

/// Plays `moves` through a fresh session.
///
/// Out-of-range indices and moves on taken cells are recorded as rejected
/// and do not stop the run.
///
/// # Errors
///
/// Returns [`MatchError`] only if the session cannot be started.
#[instrument(skip(config, moves), fields(moves = moves.len()))]
pub fn run_script(config: &MatchConfig, moves: &[usize]) -> Result<ScriptReport, MatchError> {
    let mut game = MatchController::new();
    game.start(config.player1_name(), config.player2_name())?;

    let mut rounds = Vec::new();
    let mut rejected = Vec::new();
    let mut board = game.board().clone();

    for &index in moves {
        let before = game.history().len();
        match game.play_round(index) {
            Ok(Some(result)) => {
                let round = game.scores().rounds_played();
                info!(round, %result, "Round decided");
                rounds.push(RoundSummary {
                    round,
                    winner: result.winner().map(|p| p.name().clone()),
                    message: result.to_string(),
                    moves: game.history().iter().map(|p| p.to_index()).collect(),
                });
                board = game.board().clone();
                game.reset_round();
            }
            Ok(None) if game.history().len() > before => {
                debug!(index, "Move accepted");
                board = game.board().clone();
            }
            Ok(None) => {
                warn!(index, "Cell taken, move ignored");
                rejected.push(index);
            }
            Err(e) => {
                warn!(index, error = %e, "Move rejected");
                rejected.push(index);
            }
        }
    }

    let players = game
        .players()?
        .clone()
        .map(|p| p.name().clone());

    Ok(ScriptReport {
        players,
        rounds,
        rejected,
        unfinished: game.history().iter().map(|p| p.to_index()).collect(),
        board,
        scores: game.scores(),
    })
}

impl fmt::Display for ScriptReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board.display())?;
        writeln!(f)?;
        for round in &self.rounds {
            writeln!(f, "Round {}: {}", round.round, round.message)?;
        }
        if !self.unfinished.is_empty() {
            writeln!(f, "Round {} unfinished after {} moves", self.rounds.len() + 1, self.unfinished.len())?;
        }
        if !self.rejected.is_empty() {
            let list: Vec<String> = self.rejected.iter().map(ToString::to_string).collect();
            writeln!(f, "Rejected moves: {}", list.join(", "))?;
        }
        write!(
            f,
            "{} Wins: {} | {} Wins: {} | Ties: {}",
            self.players[0],
            self.scores.player1_wins(),
            self.players[1],
            self.scores.player2_wins(),
            self.scores.ties()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_index_and_label() {
        assert_eq!(parse_move("4").unwrap(), 4);
        assert_eq!(parse_move(" center ").unwrap(), 4);
        assert_eq!(parse_move("Top-Left").unwrap(), 0);
        assert_eq!(parse_move("12").unwrap(), 12);
    }

    #[test]
    fn test_parse_move_rejects_garbage() {
        assert!(parse_move("").is_err());
        assert!(parse_move("middle-ish").is_err());
        assert!(parse_move("-1").is_err());
    }

    #[test]
    fn test_parse_moves_reports_position() {
        let err = parse_moves(&["0", "nope"]).unwrap_err();
        assert!(err.to_string().contains("Move #2"));
    }

    #[test]
    fn test_board_kept_after_decided_round() {
        let config = MatchConfig::new("Alice", "Bob");
        let report = run_script(&config, &[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(report.rounds.len(), 1);
        assert!(report.unfinished.is_empty());
        assert!(report.board.display().starts_with("X|X|X"));
    }
}
