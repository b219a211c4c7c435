//! Application state and logic.
//!
//! Terminal-independent: the event loop feeds key presses in and the UI
//! reads state out, so everything here can be exercised without a terminal.

use crate::config::MatchConfig;
use crate::input::{self, Action};
use crossterm::event::KeyCode;
use tictactoe_core::{MatchController, MatchError, Position, RoundResult};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: MatchController,
    config: MatchConfig,
    cursor: Position,
    status_message: String,
    last_result: Option<RoundResult>,
    should_quit: bool,
}

impl App {
    /// Creates the application and starts the session.
    ///
    /// # Errors
    ///
    /// Propagates [`MatchError`] from starting the session.
    #[instrument(skip(config))]
    pub fn new(config: MatchConfig) -> Result<Self, MatchError> {
        let mut game = MatchController::new();
        game.start(config.player1_name(), config.player2_name())?;
        let mut app = Self {
            game,
            config,
            cursor: Position::Center,
            status_message: String::new(),
            last_result: None,
            should_quit: false,
        };
        app.status_message = app.turn_message();
        Ok(app)
    }

    /// The match being played.
    pub fn game(&self) -> &MatchController {
        &self.game
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current status line.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Result of the last decided round, until the next round starts.
    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = input::action_for(key) else {
            return;
        };
        debug!(?action, "Key mapped");

        match action {
            Action::MoveCursor { rows, cols } => {
                self.cursor = input::move_cursor(self.cursor, rows, cols);
            }
            Action::PlayCursor => self.play(self.cursor),
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::NextRound => self.next_round(),
            Action::NewSession => self.new_session(),
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    #[instrument(skip(self))]
    fn play(&mut self, pos: Position) {
        if self.game.is_over() {
            self.status_message = self.round_over_message();
            return;
        }
        if !self.game.board().is_empty(pos) {
            self.status_message = format!("{} is taken. {}", pos.label(), self.turn_message());
            return;
        }

        match self.game.play_round(pos.to_index()) {
            Ok(Some(result)) => {
                info!(%result, "Round decided");
                self.last_result = Some(result);
                self.status_message = self.round_over_message();
            }
            Ok(None) => self.status_message = self.turn_message(),
            Err(e) => self.status_message = e.to_string(),
        }
    }

    fn next_round(&mut self) {
        self.game.reset_round();
        self.last_result = None;
        self.cursor = Position::Center;
        self.status_message = self.turn_message();
    }

    fn new_session(&mut self) {
        self.game
            .new_session(self.config.player1_name(), self.config.player2_name());
        self.last_result = None;
        self.cursor = Position::Center;
        self.status_message = format!("New session. {}", self.turn_message());
    }

    fn turn_message(&self) -> String {
        match self.game.current_player() {
            Ok(player) => format!("{}'s turn ({})", player.name(), player.mark()),
            Err(e) => e.to_string(),
        }
    }

    fn round_over_message(&self) -> String {
        let headline = self
            .last_result
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| "Round over.".to_string());
        format!("{} Press 'r' for the next round, 'n' for a new session, 'q' to quit.", headline)
    }
}
