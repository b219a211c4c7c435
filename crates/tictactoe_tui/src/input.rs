//! Keyboard mapping.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one cell.
    MoveCursor {
        /// Rows to move (negative is up).
        rows: isize,
        /// Columns to move (negative is left).
        cols: isize,
    },
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a specific cell.
    Play(Position),
    /// Start the next round with the same players.
    NextRound,
    /// Start over with a fresh tally.
    NewSession,
    /// Leave the application.
    Quit,
}

/// Maps a key to an action; unmapped keys yield `None`.
///
/// Digits 1-9 address cells in reading order, matching the numbers drawn on
/// empty cells.
pub fn action_for(key: KeyCode) -> Option<Action> {
    let action = match key {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveCursor { rows: -1, cols: 0 },
        KeyCode::Down | KeyCode::Char('j') => Action::MoveCursor { rows: 1, cols: 0 },
        KeyCode::Left | KeyCode::Char('h') => Action::MoveCursor { rows: 0, cols: -1 },
        KeyCode::Right | KeyCode::Char('l') => Action::MoveCursor { rows: 0, cols: 1 },
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlayCursor,
        KeyCode::Char(c @ '1'..='9') => {
            let digit = c.to_digit(10)? as usize;
            Action::Play(Position::from_index(digit - 1)?)
        }
        KeyCode::Char('r') => Action::NextRound,
        KeyCode::Char('n') => Action::NewSession,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Moves the cursor, staying put at the board edge.
pub fn move_cursor(cursor: Position, rows: isize, cols: isize) -> Position {
    cursor.offset(rows, cols).unwrap_or(cursor)
}
