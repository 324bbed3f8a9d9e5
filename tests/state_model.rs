//! Board model invariants over whole game trees

use mnk::{
    analysis::reachable_states,
    game::{self, Action, Cell, GameState, Player, WIN_SCORE},
};

mod common;

#[test]
fn actions_match_empty_cells_for_every_reachable_state() {
    for state in reachable_states(3, 3).unwrap() {
        let empty = state.board().iter().filter(|&&c| c == Cell::Empty).count();
        assert_eq!(game::actions(&state).len(), empty, "{}", state.encode());
    }
}

#[test]
fn piece_counts_follow_turn_order() {
    for state in reachable_states(3, 3).unwrap() {
        let x = state.board().iter().filter(|&&c| c == Cell::X).count();
        let o = state.board().iter().filter(|&&c| c == Cell::O).count();
        match state.to_move() {
            Player::X => assert_eq!(x, o),
            Player::O => assert_eq!(x, o + 1),
        }
    }
}

#[test]
fn result_never_mutates_the_parent() {
    let root = game::initial_state(3, 3).unwrap();
    let snapshot = root.clone();

    let a = game::result(&root, Action::new(0, 0)).unwrap();
    let b = game::result(&root, Action::new(2, 2)).unwrap();

    assert_eq!(root, snapshot);
    assert_ne!(a, b);
    assert_eq!(a.to_move(), Player::O);
    assert_eq!(a.cell(Action::new(0, 0)), Some(Cell::X));
    assert_eq!(b.cell(Action::new(0, 0)), Some(Cell::Empty));
}

#[test]
fn x_wins_top_row() {
    let mut state = game::initial_state(3, 3).unwrap();
    for (i, mv) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)].into_iter().enumerate() {
        assert_eq!(game::winner(&state), None, "no winner before move {i}");
        state = game::result(&state, mv.into()).unwrap();
    }

    assert_eq!(game::winner(&state), Some(Player::X));
    assert!(game::terminal(&state));
    assert_eq!(game::utility(&state), WIN_SCORE);
}

#[test]
fn winner_on_larger_boards_uses_sliding_windows() {
    // 5x5, k=4: X completes an off-center diagonal
    let state = common::play(
        GameState::new(5, 4).unwrap(),
        &[
            (1, 0),
            (0, 0),
            (2, 1),
            (0, 1),
            (3, 2),
            (0, 2),
            (4, 3),
        ],
    );
    assert_eq!(state.winner(), Some(Player::X));

    // k=4 needs four: three O marks in a row are not enough
    assert_eq!(
        common::board("OOO../XX.../X..../...../.....", 4).winner(),
        None
    );
}

#[test]
fn invalid_inputs_are_rejected() {
    assert!(game::initial_state(0, 1).is_err());
    assert!(game::initial_state(3, 4).is_err());

    let state = game::initial_state(3, 3).unwrap();
    assert!(matches!(
        game::result(&state, Action::new(0, 3)),
        Err(mnk::Error::OutOfBounds { row: 0, col: 3, size: 3 })
    ));

    let state = game::result(&state, Action::new(1, 1)).unwrap();
    assert!(matches!(
        game::result(&state, Action::new(1, 1)),
        Err(mnk::Error::Occupied { row: 1, col: 1 })
    ));
}

#[test]
fn full_board_is_terminal_without_winner() {
    let state = common::board("XOX/XOO/OXX", 3);
    assert!(game::terminal(&state));
    assert_eq!(game::winner(&state), None);
    assert_eq!(game::utility(&state), 0);
    assert!(game::actions(&state).is_empty());
}
