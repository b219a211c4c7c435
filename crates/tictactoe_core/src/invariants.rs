//! Match invariants.
//!
//! Logical properties that hold after every accepted move. The controller
//! checks them in debug builds; tests check them directly.

use super::controller::MatchController;
use super::types::{Cell, Mark, Seat};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// X opens every round, so X leads O by at most one mark.
pub struct BalancedMarksInvariant;

impl Invariant<MatchController> for BalancedMarksInvariant {
    fn holds(game: &MatchController) -> bool {
        let board = game.board();
        let (x, o) = (board.count(Mark::X), board.count(Mark::O));
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X leads O by at most one mark"
    }
}

/// Round history replays to the board: one entry per occupied cell,
/// alternating X, O, X, ...
pub struct HistoryConsistentInvariant;

impl Invariant<MatchController> for HistoryConsistentInvariant {
    fn holds(game: &MatchController) -> bool {
        let board = game.board();
        game.history().len() == board.filled()
            && game.history().iter().enumerate().all(|(i, pos)| {
                let expected = if i % 2 == 0 { Mark::X } else { Mark::O };
                board.get(*pos) == Cell::Occupied(expected)
            })
    }

    fn description() -> &'static str {
        "History matches the board and alternates X, O"
    }
}

/// While a round is live, the seat to move matches the mark counts.
pub struct TurnMatchesBoardInvariant;

impl Invariant<MatchController> for TurnMatchesBoardInvariant {
    fn holds(game: &MatchController) -> bool {
        if game.is_over() {
            return true;
        }
        let board = game.board();
        let expected = if board.count(Mark::X) == board.count(Mark::O) {
            Seat::First
        } else {
            Seat::Second
        };
        game.current_seat() == expected
    }

    fn description() -> &'static str {
        "Seat to move matches the marks on the board"
    }
}

/// All match invariants as a composable set.
pub type MatchInvariants = (
    BalancedMarksInvariant,
    HistoryConsistentInvariant,
    TurnMatchesBoardInvariant,
);

/// Asserts every match invariant (debug builds only).
#[cfg_attr(not(debug_assertions), allow(dead_code))]
pub fn assert_invariants(game: &MatchController) {
    if let Err(violations) = MatchInvariants::check_all(game) {
        for violation in &violations {
            warn!(description = %violation.description, "Match invariant violated");
        }
        debug_assert!(false, "Match invariants violated: {:?}", violations);
    }
}
