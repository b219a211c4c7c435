//! Session score tally.

use super::types::Seat;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Wins per seat and ties, accumulated over a session.
///
/// Counters only ever go up; the tally is replaced wholesale when a new
/// session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Scores {
    player1_wins: u32,
    player2_wins: u32,
    ties: u32,
}

impl Scores {
    /// Creates a tally from raw counts.
    pub fn new(player1_wins: u32, player2_wins: u32, ties: u32) -> Self {
        Self {
            player1_wins,
            player2_wins,
            ties,
        }
    }

    /// Rounds won by player 1.
    pub fn player1_wins(&self) -> u32 {
        self.player1_wins
    }

    /// Rounds won by player 2.
    pub fn player2_wins(&self) -> u32 {
        self.player2_wins
    }

    /// Rounds tied.
    pub fn ties(&self) -> u32 {
        self.ties
    }

    /// Wins credited to a seat.
    pub fn wins(&self, seat: Seat) -> u32 {
        match seat {
            Seat::First => self.player1_wins,
            Seat::Second => self.player2_wins,
        }
    }

    /// Total decided rounds.
    pub fn rounds_played(&self) -> u32 {
        self.player1_wins + self.player2_wins + self.ties
    }

    #[instrument(skip(self))]
    pub(crate) fn record_win(&mut self, seat: Seat) {
        match seat {
            Seat::First => self.player1_wins += 1,
            Seat::Second => self.player2_wins += 1,
        }
    }

    #[instrument(skip(self))]
    pub(crate) fn record_tie(&mut self) {
        self.ties += 1;
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Player 1 Wins: {} | Player 2 Wins: {} | Ties: {}",
            self.player1_wins, self.player2_wins, self.ties
        )
    }
}
