//! Multi-round match between two fixed players.

use super::board::{Board, CELL_COUNT};
use super::error::MatchError;
use super::outcome::{RoundResult, RoundStatus};
use super::position::Position;
use super::rules::{self, Verdict};
use super::scores::Scores;
use super::types::{Cell, Mark, Player, Seat};
use tracing::{debug, info, instrument, warn};

/// Orchestrates a session of rounds between two players.
///
/// The controller exclusively owns the board. Players and the score tally
/// live for the whole session; the board, the seat to move and the verdict
/// are per-round and cleared by [`MatchController::reset_round`].
#[derive(Debug, Clone, Default)]
pub struct MatchController {
    board: Board,
    players: Option<[Player; 2]>,
    seat: Seat,
    verdict: Option<Verdict>,
    scores: Scores,
    history: Vec<Position>,
}

impl MatchController {
    /// Creates a controller with no players.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seats two players: the first plays X, the second plays O.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::AlreadyStarted`] if players are already seated.
    /// The existing session is left as it was.
    #[instrument(skip(self))]
    pub fn start(&mut self, player1_name: &str, player2_name: &str) -> Result<(), MatchError> {
        if self.players.is_some() {
            warn!("Ignoring repeated start on a running session");
            return Err(MatchError::AlreadyStarted);
        }
        self.seat_players(player1_name, player2_name);
        self.reset_round();
        info!("Session started");
        Ok(())
    }

    /// Replaces both players and wipes the tally, then starts a fresh round.
    #[instrument(skip(self))]
    pub fn new_session(&mut self, player1_name: &str, player2_name: &str) {
        self.seat_players(player1_name, player2_name);
        self.scores = Scores::default();
        self.reset_round();
        info!("New session started");
    }

    fn seat_players(&mut self, player1_name: &str, player2_name: &str) {
        self.players = Some([
            Player::new(player1_name, Seat::First.mark()),
            Player::new(player2_name, Seat::Second.mark()),
        ]);
    }

    /// Both players, first seat first.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NotStarted`] before [`MatchController::start`].
    pub fn players(&self) -> Result<&[Player; 2], MatchError> {
        self.players.as_ref().ok_or(MatchError::NotStarted)
    }

    /// The player in the given seat.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NotStarted`] before [`MatchController::start`].
    pub fn player(&self, seat: Seat) -> Result<&Player, MatchError> {
        Ok(&self.players()?[seat.index()])
    }

    /// The player whose turn it is.
    ///
    /// Once a round is decided this stays on the player who made the
    /// deciding move.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NotStarted`] before [`MatchController::start`].
    pub fn current_player(&self) -> Result<&Player, MatchError> {
        self.player(self.seat)
    }

    /// The seat whose turn it is.
    pub fn current_seat(&self) -> Seat {
        self.seat
    }

    /// Attempts a move for the current player at cell `index`.
    ///
    /// Returns `Ok(Some(_))` when the move decides the round, and `Ok(None)`
    /// when play continues, when the cell was already taken (the turn does
    /// not pass), or when the round is already over.
    ///
    /// # Errors
    ///
    /// - [`MatchError::NotStarted`] before [`MatchController::start`].
    /// - [`MatchError::IndexOutOfRange`] if `index` is not in 0-8.
    ///
    /// Nothing is mutated when an error is returned.
    #[instrument(skip(self), fields(seat = ?self.seat))]
    pub fn play_round(&mut self, index: usize) -> Result<Option<RoundResult>, MatchError> {
        if self.players.is_none() {
            warn!("Move attempted before session start");
            return Err(MatchError::NotStarted);
        }
        let Some(pos) = Position::from_index(index) else {
            warn!(index, "Move outside the board");
            return Err(MatchError::IndexOutOfRange(index));
        };

        if self.is_over() {
            debug!("Round already decided, move ignored");
            return Ok(None);
        }

        let mark = self.seat.mark();
        if !self.board.place(pos, mark) {
            debug!(%pos, "Cell taken, turn does not pass");
            return Ok(None);
        }
        self.history.push(pos);

        let verdict = rules::evaluate(&self.board);
        let result = match verdict {
            Some(Verdict::Winner { mark, .. }) => {
                let seat = Seat::for_mark(mark);
                self.scores.record_win(seat);
                let winner = self.player(seat)?.clone();
                info!(winner = %winner, %mark, "Round won");
                Some(RoundResult::Win(winner))
            }
            Some(Verdict::Tie) => {
                self.scores.record_tie();
                info!("Round tied");
                Some(RoundResult::Tie)
            }
            None => {
                self.seat = self.seat.toggle();
                None
            }
        };
        self.verdict = verdict;

        #[cfg(debug_assertions)]
        super::invariants::assert_invariants(self);

        Ok(result)
    }

    /// Clears the board and hands the first move back to player 1.
    ///
    /// The score tally is not touched.
    #[instrument(skip(self))]
    pub fn reset_round(&mut self) {
        self.board.reset();
        self.seat = Seat::First;
        self.verdict = None;
        self.history.clear();
        debug!("Round reset");
    }

    /// Snapshot of the tally.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Cells in row-major order, for rendering.
    pub fn cells(&self) -> [Cell; CELL_COUNT] {
        *self.board.cells()
    }

    /// True once the current round is won or tied.
    pub fn is_over(&self) -> bool {
        self.verdict.is_some()
    }

    /// Where the current round stands.
    pub fn status(&self) -> RoundStatus {
        match (&self.players, self.verdict) {
            (None, _) => RoundStatus::NotStarted,
            (Some(_), None) => RoundStatus::InProgress,
            (Some(_), Some(Verdict::Winner { mark, .. })) => RoundStatus::Won(mark),
            (Some(_), Some(Verdict::Tie)) => RoundStatus::Tied,
        }
    }

    /// Positions played this round, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// The line that won the round, if it was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self.verdict {
            Some(Verdict::Winner { line, .. }) => Some(line),
            _ => None,
        }
    }

    /// Mark of the player to move.
    pub fn current_mark(&self) -> Mark {
        self.seat.mark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> MatchController {
        let mut game = MatchController::new();
        game.start("Alice", "Bob").unwrap();
        game
    }

    #[test]
    fn test_new_controller_is_not_started() {
        let mut game = MatchController::new();
        assert_eq!(game.status(), RoundStatus::NotStarted);
        assert_eq!(game.current_player(), Err(MatchError::NotStarted));
        assert_eq!(game.play_round(0), Err(MatchError::NotStarted));
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_start_assigns_marks() {
        let game = started();
        let [p1, p2] = game.players().unwrap();
        assert_eq!(p1.name(), "Alice");
        assert_eq!(*p1.mark(), Mark::X);
        assert_eq!(p2.name(), "Bob");
        assert_eq!(*p2.mark(), Mark::O);
        assert_eq!(game.current_player().unwrap(), p1);
        assert_eq!(game.status(), RoundStatus::InProgress);
    }

    #[test]
    fn test_second_start_is_rejected() {
        let mut game = started();
        game.play_round(4).unwrap();

        assert_eq!(game.start("Carol", "Dave"), Err(MatchError::AlreadyStarted));
        assert_eq!(game.players().unwrap()[0].name(), "Alice");
        assert_eq!(game.history(), &[Position::Center]);
    }

    #[test]
    fn test_out_of_range_mutates_nothing() {
        let mut game = started();
        game.play_round(0).unwrap();
        let before = game.cells();

        assert_eq!(game.play_round(9), Err(MatchError::IndexOutOfRange(9)));
        assert_eq!(game.cells(), before);
        assert_eq!(game.current_seat(), Seat::Second);
    }

    #[test]
    fn test_winning_line_reported() {
        let mut game = started();
        for index in [0, 3, 1, 4, 2] {
            game.play_round(index).unwrap();
        }
        assert_eq!(
            game.winning_line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert_eq!(game.status(), RoundStatus::Won(Mark::X));
        assert_eq!(game.current_player().unwrap().name(), "Alice");
    }

    #[test]
    fn test_new_session_resets_tally() {
        let mut game = started();
        for index in [0, 3, 1, 4, 2] {
            game.play_round(index).unwrap();
        }
        assert_eq!(game.scores().player1_wins(), 1);

        game.new_session("Carol", "Dave");
        assert_eq!(game.scores(), Scores::default());
        assert_eq!(game.players().unwrap()[1].name(), "Dave");
        assert_eq!(game.status(), RoundStatus::InProgress);
        assert!(game.history().is_empty());
    }
}
