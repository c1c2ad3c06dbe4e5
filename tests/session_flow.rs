//! End-to-end session behavior: moves in, analysis back, suggestions
//! replayed, resets, and stale-response handling.

use chess_analysis_board::analysis::{AnalysisState, AnalysisStatus};
use chess_analysis_board::game::{GameSession, MoveIntent, Position};

fn intent(notation: &str) -> MoveIntent {
    notation.parse().expect("test notation should parse")
}

#[test]
fn move_analyze_and_play_back_cycle() {
    let mut session = GameSession::new();

    // the user drags e2 to e4
    let first_move = MoveIntent::from_coords("e2", "e4", None).expect("coords should parse");
    assert!(session.attempt_move(&first_move));
    let token = session.latest_token();

    assert_eq!(session.position().side_to_move_label(), "black");
    assert!(session.analysis().is_pending());

    // the analysis service answers for that request
    let outcome = AnalysisState::ready(Some("e7e5".to_string()), Some("+0.3".to_string()));
    assert!(session.resolve_analysis(token, outcome));
    assert_eq!(session.analysis().status, AnalysisStatus::Ready);
    assert_eq!(session.analysis().best_move.as_deref(), Some("e7e5"));
    assert_eq!(session.analysis().score.as_deref(), Some("+0.3"));

    // the user plays the suggestion
    assert!(session.play_suggested());
    assert!(session
        .position()
        .fen()
        .starts_with("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w"));
    assert!(session.latest_token() > token);
    assert!(session.analysis().is_pending());
}

#[test]
fn rapid_moves_keep_only_the_newest_analysis() {
    let mut session = GameSession::new();

    assert!(session.attempt_move(&intent("e2e4")));
    let first = session.latest_token();
    assert!(session.attempt_move(&intent("e7e5")));
    let second = session.latest_token();
    assert!(session.attempt_move(&intent("g1f3")));
    let third = session.latest_token();

    // responses land out of order; only the one for the newest move counts
    assert!(!session.resolve_analysis(
        second,
        AnalysisState::ready(Some("b8c6".to_string()), Some("+0.2".to_string()))
    ));
    assert!(!session.resolve_analysis(
        first,
        AnalysisState::ready(Some("e7e5".to_string()), Some("+0.3".to_string()))
    ));
    assert!(session.analysis().is_pending());

    assert!(session.resolve_analysis(
        third,
        AnalysisState::ready(Some("b8c6".to_string()), Some("0.0".to_string()))
    ));
    assert_eq!(session.analysis().best_move.as_deref(), Some("b8c6"));
    assert_eq!(session.analysis().status, AnalysisStatus::Ready);
}

#[test]
fn reset_cancels_an_in_flight_request() {
    let mut session = GameSession::new();
    assert!(session.attempt_move(&intent("e2e4")));
    let in_flight = session.latest_token();

    session.reset();
    assert_eq!(session.position(), &Position::initial());
    assert_eq!(session.analysis().status, AnalysisStatus::Idle);

    // the old response arrives after the reset and must change nothing
    let late = AnalysisState::ready(Some("e7e5".to_string()), Some("+0.3".to_string()));
    assert!(!session.resolve_analysis(in_flight, late));
    assert_eq!(session.analysis().status, AnalysisStatus::Idle);
    assert!(session.analysis().best_move.is_none());
}

#[test]
fn failed_analysis_shows_sentinels_but_keeps_the_game_playable() {
    let mut session = GameSession::new();
    assert!(session.attempt_move(&intent("e2e4")));
    let token = session.latest_token();
    let fen_after_move = session.position().fen();

    assert!(session.resolve_analysis(token, AnalysisState::failed()));
    assert!(session.analysis().is_failed());
    assert_eq!(session.analysis().best_move.as_deref(), Some("-"));
    assert_eq!(session.analysis().score.as_deref(), Some("Error"));
    assert_eq!(session.position().fen(), fen_after_move);

    // the failed sentinel is not playable, but the user still is
    assert!(!session.play_suggested());
    assert!(session.attempt_move(&intent("e7e5")));
}

#[test]
fn promotion_from_the_board_defaults_to_queen() {
    let mut session = GameSession::new();
    // the a-pawn eats its way up the board in the fewest possible moves
    for notation in ["a2a4", "b7b5", "a4b5", "a7a6", "b5a6", "c8b7", "a6b7", "b8c6"] {
        assert!(session.attempt_move(&intent(notation)), "move {} should be legal", notation);
    }

    // the board UI sends plain squares; the queen is implied
    let capture_into_promotion = MoveIntent::from_coords("b7", "a8", None).unwrap();
    assert!(session.attempt_move(&capture_into_promotion));
    assert!(session.position().fen().starts_with("Q2qkbnr"));
    assert_eq!(session.position().side_to_move_label(), "black");
}

#[test]
fn rejected_ui_move_changes_nothing() {
    let mut session = GameSession::new();
    let snapshot = session.clone();

    // black cannot move first
    let premature = MoveIntent::from_coords("e7", "e5", None).unwrap();
    assert!(!session.attempt_move(&premature));
    assert_eq!(session, snapshot);

    // a square outside the board never reaches the session at all
    assert!(MoveIntent::from_coords("e9", "e4", None).is_err());
}
