//! Search strategies against each other and against brute force

use mnk::{
    agent::{DEFAULT_DEPTH, random_opening, select_move},
    analysis::reachable_states,
    evaluate,
    game::{self, Action, GameState, Player, WIN_SCORE},
    search::{minimax_ab_outcome, minimax_outcome, search_outcome},
};
use rand::{SeedableRng, rngs::StdRng};

mod common;

/// Value of each child searched with an immediate leaf, as depth 0/1 sees it.
fn one_ply_values(state: &GameState) -> Vec<(Action, i32)> {
    game::actions(state)
        .into_iter()
        .map(|action| {
            let child = game::result(state, action).unwrap();
            let value = if game::terminal(&child) {
                game::utility(&child)
            } else {
                evaluate(&child)
            };
            (action, value)
        })
        .collect()
}

/// Best of `values` for `mover`, first (smallest) action on ties.
fn brute_force_best(mover: Player, values: &[(Action, i32)]) -> (Action, i32) {
    let mut best = values[0];
    for &(action, value) in &values[1..] {
        let better = match mover {
            Player::X => value > best.1,
            Player::O => value < best.1,
        };
        if better {
            best = (action, value);
        }
    }
    best
}

#[test]
fn alpha_beta_matches_minimax_from_the_empty_board() {
    let root = game::initial_state(3, 3).unwrap();
    let exact = minimax_outcome(&root).unwrap();
    let pruned = minimax_ab_outcome(&root, None).unwrap();
    let probed = minimax_ab_outcome(&root, Some(&evaluate)).unwrap();

    assert_eq!(exact.value, 0);
    assert_eq!(pruned.value, exact.value);
    assert_eq!(probed.value, exact.value);
    assert!(pruned.stats.nodes < exact.stats.nodes);
}

#[test]
fn alpha_beta_matches_minimax_after_every_first_move() {
    let root = game::initial_state(3, 3).unwrap();
    for action in game::actions(&root) {
        let state = game::result(&root, action).unwrap();
        let exact = minimax_outcome(&state).unwrap();
        for outcome in [
            minimax_ab_outcome(&state, None).unwrap(),
            minimax_ab_outcome(&state, Some(&evaluate)).unwrap(),
        ] {
            assert_eq!(outcome.value, exact.value, "after X plays {action}");
            assert_eq!(outcome.action, exact.action, "after X plays {action}");
        }
    }
}

#[test]
fn alpha_beta_matches_minimax_on_late_positions() {
    let late = reachable_states(3, 3)
        .unwrap()
        .into_iter()
        .filter(|s| s.occupied_count() >= 5 && !s.is_terminal());

    for state in late {
        let exact = minimax_outcome(&state).unwrap();
        let pruned = minimax_ab_outcome(&state, None).unwrap();
        assert_eq!(pruned.value, exact.value, "{}", state.encode());
        assert_eq!(pruned.action, exact.action, "{}", state.encode());
    }
}

#[test]
fn shallow_search_picks_the_best_immediate_child() {
    for seed in 0..8 {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = random_opening(GameState::new(4, 3).unwrap(), 3, &mut rng).unwrap();
        if state.is_terminal() {
            continue;
        }

        let values = one_ply_values(&state);
        let (action, value) = brute_force_best(state.to_move(), &values);

        for depth in [0, 1] {
            let outcome = search_outcome(&state, depth, &evaluate).unwrap();
            assert_eq!(outcome.action, action, "seed {seed} depth {depth}");
            assert_eq!(outcome.value, value, "seed {seed} depth {depth}");
        }
        assert_eq!(select_move(Some(&state), 0), Some(action), "seed {seed}");
    }
}

#[test]
fn select_move_dispatches_on_board_shape() {
    // 3x3 is solved exactly
    let state = common::board("X../.O./..X", 3);
    let exact = minimax_outcome(&state).unwrap();
    assert_eq!(select_move(Some(&state), DEFAULT_DEPTH), Some(exact.action));

    // elsewhere depth-limited search still takes an immediate win
    let state = common::board("XXX./OOO./..../....", 4);
    assert_eq!(state.to_move(), Player::X);
    assert_eq!(select_move(Some(&state), DEFAULT_DEPTH), Some(Action::new(0, 3)));
}

#[test]
fn select_move_returns_none_without_a_move() {
    assert_eq!(select_move(None, DEFAULT_DEPTH), None);
    let full = common::board("XOX/XOO/OXX", 3);
    assert_eq!(select_move(Some(&full), DEFAULT_DEPTH), None);
    let won = common::board("XXX/OO./...", 3);
    assert_eq!(select_move(Some(&won), DEFAULT_DEPTH), None);
}

#[test]
fn decided_positions_evaluate_to_win_score() {
    for state in reachable_states(3, 3).unwrap() {
        match state.winner() {
            Some(Player::X) => assert_eq!(evaluate(&state), WIN_SCORE),
            Some(Player::O) => assert_eq!(evaluate(&state), -WIN_SCORE),
            None => assert!(evaluate(&state).abs() < WIN_SCORE),
        }
    }
}
