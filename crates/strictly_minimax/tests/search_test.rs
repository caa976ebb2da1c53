//! Tests for the minimax search engine.

use strictly_minimax::{
    Board, Mark, Outcome, Position, SearchResult, Square, apply_move, current_player,
    initial_state, is_terminal, legal_moves, max_value, min_value, minimax, outcome, search,
    utility,
};

/// Worst utility (from `engine`'s side) over every opponent line of play,
/// with `engine` always following the search.
fn worst_case(board: &Board, engine: Mark) -> i32 {
    if is_terminal(board) {
        return utility(board);
    }
    if current_player(board) == engine {
        let mv = minimax(board).unwrap();
        return worst_case(&apply_move(board, mv).unwrap(), engine);
    }
    let replies = legal_moves(board)
        .into_iter()
        .map(|mv| worst_case(&apply_move(board, mv).unwrap(), engine));
    match engine {
        Mark::X => replies.min().unwrap(),
        Mark::O => replies.max().unwrap(),
    }
}

#[test]
fn test_opening_move_is_center() {
    assert_eq!(minimax(&initial_state()), Some(Position::Center));
    assert_eq!(minimax(&initial_state()), Position::from_coords(1, 1));
}

#[test]
fn test_self_play_ends_in_draw() {
    let mut board = initial_state();
    let mut plies = 0;
    while let Some(mv) = minimax(&board) {
        board = apply_move(&board, mv).unwrap();
        plies += 1;
    }
    assert_eq!(plies, 9);
    assert_eq!(utility(&board), 0);
    assert_eq!(outcome(&board), Outcome::Draw);
    assert_eq!(board.compact(), "OXXXXOOOX");
}

#[test]
fn test_x_takes_the_win() {
    let x = Square::Occupied(Mark::X);
    let o = Square::Occupied(Mark::O);
    let e = Square::Empty;
    let board = Board::from_rows([[x, x, e], [o, o, e], [e, e, e]]);
    assert_eq!(current_player(&board), Mark::X);
    assert_eq!(minimax(&board), Position::from_coords(0, 2));
    assert_eq!(max_value(&board), 1);
    assert_eq!(search(&board), SearchResult::new(Some(Position::TopRight), 1));
}

#[test]
fn test_terminal_board_returns_none() {
    let board: Board = "XOX/OXX/OXO".parse().unwrap();
    assert_eq!(minimax(&board), None);
    assert_eq!(search(&board).best_move, None);
}

#[test]
fn test_engine_as_x_never_loses() {
    assert!(worst_case(&initial_state(), Mark::X) >= 0);
}

#[test]
fn test_engine_as_o_never_loses() {
    assert!(worst_case(&initial_state(), Mark::O) <= 0);
}

#[test]
fn test_search_value_agrees_with_recursion() {
    for text in ["X../.O./..X", "XO./.X./...", "X.O/.../..."] {
        let board: Board = text.parse().unwrap();
        let result = search(&board);
        let expected = match current_player(&board) {
            Mark::X => max_value(&board),
            Mark::O => min_value(&board),
        };
        assert_eq!(result.value, expected, "{}", text);
    }
}

#[test]
fn test_search_result_serializes() {
    let result = search(&"XX./OO./...".parse().unwrap());
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(json, r#"{"best_move":"TopRight","value":1}"#);
    let back: SearchResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}
