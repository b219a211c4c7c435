//! Round results and round status.

use super::types::{Mark, Player};
use serde::{Deserialize, Serialize};

/// Result of the move that decided a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// The named player completed a line.
    Win(Player),
    /// The board filled up without a line.
    Tie,
}

impl RoundResult {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            RoundResult::Win(player) => Some(player),
            RoundResult::Tie => None,
        }
    }

    /// Returns true if the round was tied.
    pub fn is_tie(&self) -> bool {
        matches!(self, RoundResult::Tie)
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundResult::Win(player) => write!(f, "{} wins!", player.name()),
            RoundResult::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// Where the current round stands.
///
/// `NotStarted` until players join; `Won` and `Tied` are absorbing until the
/// next round is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// No players yet.
    NotStarted,
    /// Moves are being accepted.
    InProgress,
    /// The holder of this mark completed a line.
    Won(Mark),
    /// Board full, nobody won.
    Tied,
}

impl RoundStatus {
    /// True for `Won` and `Tied`.
    pub fn is_terminal(self) -> bool {
        matches!(self, RoundStatus::Won(_) | RoundStatus::Tied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let alice = Player::new("Alice", Mark::X);
        assert_eq!(RoundResult::Win(alice).to_string(), "Alice wins!");
        assert_eq!(RoundResult::Tie.to_string(), "It's a tie!");
    }

    #[test]
    fn test_winner_accessor() {
        let bob = Player::new("Bob", Mark::O);
        let result = RoundResult::Win(bob.clone());
        assert_eq!(result.winner(), Some(&bob));
        assert!(!result.is_tie());
        assert_eq!(RoundResult::Tie.winner(), None);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!RoundStatus::NotStarted.is_terminal());
        assert!(!RoundStatus::InProgress.is_terminal());
        assert!(RoundStatus::Won(Mark::X).is_terminal());
        assert!(RoundStatus::Tied.is_terminal());
    }
}
