//! Errors raised by the match engine.
//!
//! Only caller mistakes are errors. An occupied cell or a move after the
//! round is decided is an ordinary negative outcome, not a `MatchError`.

/// Precondition violation when driving a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MatchError {
    /// Cell index is not in 0-8.
    #[display("Cell index {} is outside the board (expected 0-8)", _0)]
    IndexOutOfRange(usize),

    /// The match has no players yet.
    #[display("Session not started: call start() with two player names first")]
    NotStarted,

    /// `start` was called on a match that already has players.
    #[display("Session already started; use new_session() to replace the players")]
    AlreadyStarted,
}

impl std::error::Error for MatchError {}
