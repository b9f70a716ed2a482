//! Tests for snapshot serialization.

use konane::{
    Board, GameState, Interaction, InteractionKind, Phase, Player, Position, dispatch, interact,
    new_game,
};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

#[test]
fn test_snapshot_round_trip() {
    let state = interact(&interact(&new_game(), pos(3, 3)), pos(3, 4));
    let state = interact(&state, pos(3, 1));

    let json = serde_json::to_string(&state).expect("Serialize");
    let restored: GameState = serde_json::from_str(&json).expect("Deserialize");

    assert_eq!(restored, state);
    assert_eq!(restored.phase(), Phase::Playing);
    assert!(restored.check_invariants().is_ok());
}

#[test]
fn test_position_serializes_as_row_col() {
    let json = serde_json::to_value(pos(2, 5)).expect("Serialize");
    assert_eq!(json, serde_json::json!({ "row": 2, "col": 5 }));
}

#[test]
fn test_out_of_bounds_position_is_rejected() {
    let result: Result<Position, _> = serde_json::from_str(r#"{ "row": 8, "col": 0 }"#);
    assert!(result.is_err());

    let result: Result<Position, _> = serde_json::from_str(r#"{ "row": -1, "col": 3 }"#);
    assert!(result.is_err());
}

#[test]
fn test_tampered_snapshot_fails_invariants() {
    let state = new_game();
    let mut json = serde_json::to_value(&state).expect("Serialize");
    json["removed_pieces"] = serde_json::json!(1);

    let tampered: GameState = serde_json::from_value(json).expect("Deserialize");
    let violations = tampered.check_invariants().unwrap_err();
    assert_eq!(violations.len(), 1);
}

#[test]
fn test_rearranged_setup_snapshot_is_rejected_and_dispatch_stays_total() {
    let board = Board::from_diagram(
        ".BBBBBBB
         BBBBBBBB
         BBBBBBBB
         BBBBBBBB
         BBBBBBBB
         BBBBBBBB
         BBBBBBBB
         BBBBBBBW",
    )
    .expect("Diagram");

    let mut json = serde_json::to_value(new_game()).expect("Serialize");
    json["board"] = serde_json::to_value(&board).expect("Serialize board");
    json["removed_pieces"] = serde_json::json!(1);
    json["current_player"] = serde_json::json!("White");
    let tampered: GameState = serde_json::from_value(json).expect("Deserialize");

    assert!(tampered.check_invariants().is_err());

    // White lifts its only piece; Black is left without a jump.
    let transition = dispatch(&tampered, Interaction::new(pos(7, 7)));
    assert_eq!(transition.kind, InteractionKind::Removed);
    assert_eq!(transition.state.phase(), Phase::Playing);
    assert_eq!(transition.state.board().count(Player::White), 0);
}
