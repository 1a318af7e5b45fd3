#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use tictactoe::TicTacToe;

wasm_bindgen_test_configure!(run_in_browser);

fn field(state: &JsValue, name: &str) -> JsValue {
    Reflect::get(state, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn wasm_is_ready() {
    assert!(tictactoe::wasm_ready());
}

#[wasm_bindgen_test]
fn classic_game_reports_winner_in_state() {
    let mut game = TicTacToe::new(3, 3).ok().expect("valid configuration");
    for index in [0, 1, 4, 2, 8] {
        assert!(game.play(index));
    }

    assert!(game.is_over());
    assert_eq!(game.status_text(), "X wins!");
    assert!(!game.play(3));

    let state = game.state().unwrap();
    assert_eq!(field(&state, "status").as_string().unwrap(), "X wins!");
    assert_eq!(field(&state, "is_game_over").as_bool(), Some(true));
    assert_eq!(field(&state, "move_count").as_f64(), Some(5.0));
}

#[wasm_bindgen_test]
fn invalid_configuration_throws_and_keeps_session() {
    assert!(TicTacToe::new(4, 5).is_err());

    let mut game = TicTacToe::new(4, 4).ok().expect("valid configuration");
    assert!(game.play(0));
    assert!(game.set_win_streak(5).is_err());
    assert_eq!(game.current_player(), "O");

    assert!(game.set_grid_size(3).is_ok());
    let state = game.state().unwrap();
    assert_eq!(field(&state, "win_streak").as_f64(), Some(3.0));
    assert_eq!(game.current_player(), "X");
}

#[wasm_bindgen_test]
fn reset_clears_board() {
    let mut game = TicTacToe::new(5, 4).ok().expect("valid configuration");
    assert!(game.play(12));
    game.reset();

    assert!(!game.is_over());
    assert_eq!(game.status_text(), "In progress");
    assert_eq!(game.current_player(), "X");
}

#[wasm_bindgen_test]
fn oversized_numbers_are_rejected_not_wrapped() {
    // 259 and 266 would wrap to 3 and 10 as u8.
    assert!(TicTacToe::new(259, 3).is_err());
    assert!(TicTacToe::new(5, 260).is_err());

    let mut game = TicTacToe::new(5, 4).ok().expect("valid configuration");
    assert!(game.play(6));
    assert!(game.set_grid_size(259).is_err());
    assert!(game.set_grid_size(266).is_err());
    assert!(game.set_win_streak(259).is_err());
    assert!(game.configure(259, 3).is_err());

    let state = game.state().unwrap();
    assert_eq!(field(&state, "grid_size").as_f64(), Some(5.0));
    assert_eq!(field(&state, "move_count").as_f64(), Some(1.0));
}
