//! Two-player tic-tac-toe match engine.
//!
//! The crate models a session of tic-tac-toe rounds between two named
//! players and keeps a running score tally across rounds. It is a pure,
//! synchronous state machine: any presentation layer (terminal, web page,
//! test harness) drives it through [`MatchController`].
//!
//! # Architecture
//!
//! - **Board**: the 9-cell grid; the only authority over cell contents.
//! - **Rules**: pure win/tie evaluation over a board.
//! - **MatchController**: players, turn order, round lifecycle and scores.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::MatchController;
//!
//! let mut game = MatchController::new();
//! game.start("Alice", "Bob")?;
//!
//! let mut result = None;
//! for index in [0, 3, 1, 4, 2] {
//!     result = game.play_round(index)?;
//! }
//!
//! assert_eq!(result.map(|r| r.to_string()), Some("Alice wins!".to_string()));
//! assert_eq!(game.scores().player1_wins(), 1);
//! # Ok::<(), tictactoe_core::MatchError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
mod error;
mod invariants;
mod outcome;
mod position;
pub mod rules;
mod scores;
mod types;

pub use board::{Board, CELL_COUNT};
pub use controller::MatchController;
pub use error::MatchError;
pub use invariants::{
    BalancedMarksInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MatchInvariants, TurnMatchesBoardInvariant,
};
pub use outcome::{RoundResult, RoundStatus};
pub use position::Position;
pub use rules::Verdict;
pub use scores::Scores;
pub use types::{Cell, Mark, Player, Seat};
