//! End-to-end tests for the match controller.

use tictactoe_core::rules::LINES;
use tictactoe_core::{
    Cell, MatchController, MatchError, Mark, Position, RoundResult, RoundStatus, Scores, Seat,
};

fn started() -> MatchController {
    let mut game = MatchController::new();
    game.start("Alice", "Bob").expect("fresh controller accepts start");
    game
}

/// Plays `moves` in order and returns the result of the last one.
fn play_all(game: &mut MatchController, moves: &[usize]) -> Option<RoundResult> {
    let mut last = None;
    for &index in moves {
        last = game.play_round(index).expect("valid index");
    }
    last
}

/// Three cells outside `line` that do not form a line themselves.
fn filler_for(line: [Position; 3]) -> [Position; 3] {
    let free: Vec<Position> = Position::ALL
        .into_iter()
        .filter(|pos| !line.contains(pos))
        .collect();
    for i in 0..free.len() {
        for j in i + 1..free.len() {
            for k in j + 1..free.len() {
                let candidate = [free[i], free[j], free[k]];
                let forms_line = LINES
                    .iter()
                    .any(|l| l.iter().all(|pos| candidate.contains(pos)));
                if !forms_line {
                    return candidate;
                }
            }
        }
    }
    panic!("no filler found for {:?}", line);
}

#[test]
fn test_alice_wins_top_row() {
    let mut game = started();
    let result = play_all(&mut game, &[0, 3, 1, 4, 2]);

    let result = result.expect("top row decides the round");
    assert_eq!(result.to_string(), "Alice wins!");
    assert_eq!(result.winner().map(|p| p.name().as_str()), Some("Alice"));
    assert_eq!(game.scores(), Scores::new(1, 0, 0));
    assert!(game.is_over());
}

#[test]
fn test_tie_sequence() {
    let mut game = started();
    let result = play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(result, Some(RoundResult::Tie));
    assert_eq!(result.map(|r| r.to_string()).as_deref(), Some("It's a tie!"));
    assert_eq!(game.status(), RoundStatus::Tied);
    assert!(game.cells().iter().all(|c| !c.is_empty()));
    assert_eq!(game.scores(), Scores::new(0, 0, 1));
    assert_eq!(game.winning_line(), None);
}

#[test]
fn test_every_line_wins_for_player_one() {
    for line in LINES {
        let mut game = started();
        let filler = filler_for(line);
        let moves = [
            line[0].to_index(),
            filler[0].to_index(),
            line[1].to_index(),
            filler[1].to_index(),
            line[2].to_index(),
        ];

        let result = play_all(&mut game, &moves);
        assert_eq!(
            result.as_ref().and_then(|r| r.winner()).map(|p| *p.mark()),
            Some(Mark::X),
            "line {:?}",
            line
        );
        assert_eq!(game.winning_line(), Some(line));
        assert_eq!(game.scores().player1_wins(), 1);
    }
}

#[test]
fn test_every_line_wins_for_player_two() {
    for line in LINES {
        let mut game = started();
        let filler = filler_for(line);
        let moves = [
            filler[0].to_index(),
            line[0].to_index(),
            filler[1].to_index(),
            line[1].to_index(),
            filler[2].to_index(),
            line[2].to_index(),
        ];

        let result = play_all(&mut game, &moves);
        assert_eq!(
            result.map(|r| r.to_string()).as_deref(),
            Some("Bob wins!"),
            "line {:?}",
            line
        );
        assert_eq!(game.status(), RoundStatus::Won(Mark::O));
        assert_eq!(game.scores(), Scores::new(0, 1, 0));
    }
}

#[test]
fn test_no_moves_accepted_after_win() {
    let mut game = started();
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    let frozen = game.cells();

    for index in 0..9 {
        assert_eq!(game.play_round(index), Ok(None));
    }
    assert_eq!(game.cells(), frozen);
    assert_eq!(game.scores(), Scores::new(1, 0, 0));
}

#[test]
fn test_turn_alternates_on_accepted_moves() {
    let mut game = started();
    assert_eq!(game.current_player().unwrap().name(), "Alice");

    game.play_round(4).unwrap();
    assert_eq!(game.current_player().unwrap().name(), "Bob");
    assert_eq!(game.current_seat(), Seat::Second);

    game.play_round(0).unwrap();
    assert_eq!(game.current_player().unwrap().name(), "Alice");
}

#[test]
fn test_rejected_move_keeps_turn() {
    let mut game = started();
    game.play_round(4).unwrap();
    let before = game.cells();

    assert_eq!(game.play_round(4), Ok(None));
    assert_eq!(game.current_player().unwrap().name(), "Bob");
    assert_eq!(game.cells(), before);
    assert_eq!(game.history(), &[Position::Center]);
}

#[test]
fn test_scores_persist_across_rounds() {
    let mut game = started();

    // Alice wins the top row.
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    game.reset_round();
    assert_eq!(game.scores(), Scores::new(1, 0, 0));

    // Bob wins the middle row.
    play_all(&mut game, &[0, 3, 1, 4, 8, 5]);
    game.reset_round();
    assert_eq!(game.scores(), Scores::new(1, 1, 0));

    // Tie.
    play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    game.reset_round();
    assert_eq!(game.scores(), Scores::new(1, 1, 1));
    assert_eq!(game.scores().rounds_played(), 3);
}

#[test]
fn test_reset_round_is_idempotent() {
    let mut game = started();
    play_all(&mut game, &[0, 3, 1]);

    game.reset_round();
    let once = (game.cells(), game.current_seat(), game.is_over(), game.scores());
    game.reset_round();
    let twice = (game.cells(), game.current_seat(), game.is_over(), game.scores());

    assert_eq!(once, twice);
    assert_eq!(once.0, [Cell::Empty; 9]);
    assert_eq!(once.1, Seat::First);
    assert!(!once.2);
}

#[test]
fn test_reset_round_reopens_decided_round() {
    let mut game = started();
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    assert!(game.status().is_terminal());

    game.reset_round();
    assert_eq!(game.status(), RoundStatus::InProgress);
    assert_eq!(game.current_player().unwrap().name(), "Alice");
    assert_eq!(game.play_round(4), Ok(None));
    assert_eq!(game.board().get(Position::Center), Cell::Occupied(Mark::X));
}

#[test]
fn test_errors_before_start() {
    let mut game = MatchController::new();
    assert_eq!(game.play_round(0), Err(MatchError::NotStarted));
    assert!(matches!(game.current_player(), Err(MatchError::NotStarted)));
    assert_eq!(game.status(), RoundStatus::NotStarted);
    assert_eq!(
        MatchError::NotStarted.to_string(),
        "Session not started: call start() with two player names first"
    );
}

#[test]
fn test_out_of_range_index_fails_fast() {
    let mut game = started();
    assert_eq!(game.play_round(42), Err(MatchError::IndexOutOfRange(42)));
    assert_eq!(game.current_seat(), Seat::First);
    assert!(game.history().is_empty());
}

#[test]
fn test_out_of_range_after_round_over_still_errors() {
    let mut game = started();
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    assert_eq!(game.play_round(9), Err(MatchError::IndexOutOfRange(9)));
}

#[test]
fn test_repeated_start_rejected() {
    let mut game = started();
    assert_eq!(game.start("Carol", "Dave"), Err(MatchError::AlreadyStarted));
    let names: Vec<_> = game
        .players()
        .unwrap()
        .iter()
        .map(|p| p.name().clone())
        .collect();
    assert_eq!(names, ["Alice", "Bob"]);
}

#[test]
fn test_independent_matches() {
    let mut first = started();
    let mut second = started();

    play_all(&mut first, &[0, 3, 1, 4, 2]);
    assert_eq!(first.scores().player1_wins(), 1);
    assert_eq!(second.scores(), Scores::default());
    assert_eq!(second.play_round(0), Ok(None));
}

#[test]
fn test_result_serializes() {
    let mut game = started();
    let result = play_all(&mut game, &[0, 3, 1, 4, 2]).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["Win"]["name"], "Alice");
    assert_eq!(json["Win"]["mark"], "X");

    let scores = serde_json::to_value(game.scores()).unwrap();
    assert_eq!(scores["player1_wins"], 1);
}
