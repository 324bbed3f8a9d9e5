//! Move selection: exact play on 3×3, heuristic search elsewhere

use log::trace;
use rand::Rng;

use crate::{
    Result,
    config::EngineConfig,
    game::{Action, Game, GameState, Player},
    heuristic::{LineHeuristic, evaluate},
    search::{self, SearchOutcome},
};

/// Default ply depth for depth-limited search
pub const DEFAULT_DEPTH: u32 = 3;

/// Whether `state` is the classical game that exact search solves outright
fn is_classical(state: &GameState) -> bool {
    state.size() == 3 && state.win_length() == 3
}

/// Choose a move for the side to move.
///
/// Returns `None` when there is no game (`state` is `None`) or the game is
/// over. The classical 3×3 game is searched exactly with alpha-beta; every
/// other board uses depth-limited search with the line heuristic.
///
/// # Examples
///
/// ```
/// use mnk::{agent::{DEFAULT_DEPTH, select_move}, game::{Action, GameState}};
///
/// // O must block the top row
/// let state = GameState::from_string("XX./.O./...", 3).unwrap();
/// assert_eq!(select_move(Some(&state), DEFAULT_DEPTH), Some(Action::new(0, 2)));
/// assert_eq!(select_move(None, DEFAULT_DEPTH), None);
/// ```
pub fn select_move(state: Option<&GameState>, depth: u32) -> Option<Action> {
    let state = state?;
    if is_classical(state) {
        trace!("exact alpha-beta for classical board");
        search::minimax_ab(state, None)
    } else {
        trace!("depth {depth} search for {}x{} k={}", state.size(), state.size(), state.win_length());
        search::search(state, depth, &evaluate)
    }
}

/// Move-selecting agent carrying its own configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Agent {
    config: EngineConfig,
    heuristic: LineHeuristic,
}

impl Agent {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            heuristic: config.heuristic(),
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Search `state` with the same dispatch as [`select_move`].
    pub fn choose(&self, state: &GameState) -> Option<SearchOutcome> {
        if is_classical(state) {
            search::minimax_ab_outcome(state, None)
        } else {
            search::search_outcome(state, self.config.depth, &self.heuristic)
        }
    }

    pub fn choose_move(&self, state: &GameState) -> Option<Action> {
        self.choose(state).map(|outcome| outcome.action)
    }
}

/// Play `state` out to the end, X moves chosen by `x`, O moves by `o`.
pub fn self_play(state: GameState, x: &Agent, o: &Agent) -> Result<Game> {
    let mut game = Game::from_state(state);

    while !game.is_over() {
        let current = game.current_state();
        let agent = match current.to_move() {
            Player::X => x,
            Player::O => o,
        };
        let Some(action) = agent.choose_move(current) else {
            break;
        };
        game.play(action)?;
    }

    Ok(game)
}

/// Apply `plies` uniformly random moves to `state`, stopping early if the
/// game ends.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidConfiguration`] if `plies` exceeds the
/// number of empty cells.
pub fn random_opening<R: Rng>(state: GameState, plies: usize, rng: &mut R) -> Result<GameState> {
    let empty = state.actions().len();
    if plies > empty {
        return Err(crate::Error::InvalidConfiguration {
            message: format!("random opening of {plies} plies exceeds {empty} empty cells"),
        });
    }

    let mut state = state;
    for _ in 0..plies {
        if state.is_terminal() {
            break;
        }
        let actions = state.actions();
        let action = actions[rng.random_range(0..actions.len())];
        state = state.child(action);
    }

    Ok(state)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::game::GameOutcome;

    #[test]
    fn test_none_state() {
        assert_eq!(select_move(None, DEFAULT_DEPTH), None);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let full = GameState::from_string("XOX/XOO/OXX", 3).unwrap();
        assert_eq!(select_move(Some(&full), DEFAULT_DEPTH), None);
        assert!(Agent::default().choose(&full).is_none());
    }

    #[test]
    fn test_classical_self_play_is_a_draw() {
        let agent = Agent::default();
        let game = self_play(GameState::new(3, 3).unwrap(), &agent, &agent).unwrap();
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
        assert_eq!(game.moves().len(), 9);
    }

    #[test]
    fn test_large_board_self_play_finishes() {
        let agent = Agent::new(EngineConfig::new().with_depth(2));
        let game = self_play(GameState::new(4, 3).unwrap(), &agent, &agent).unwrap();
        assert!(game.is_over());
        assert!(game.current_state().is_valid());
    }

    #[test]
    fn test_agent_matches_select_move_with_default_config() {
        let state = GameState::from_string("X.../.O../..../....", 3).unwrap();
        assert_eq!(
            Agent::default().choose_move(&state),
            select_move(Some(&state), DEFAULT_DEPTH)
        );
    }

    #[test]
    fn test_random_opening_is_seeded() {
        let start = GameState::new(4, 3).unwrap();
        let a = random_opening(start.clone(), 3, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = random_opening(start.clone(), 3, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.occupied_count(), 3);
        assert!(a.is_valid());

        let err = random_opening(start, 17, &mut StdRng::seed_from_u64(7)).unwrap_err();
        assert!(matches!(err, crate::Error::InvalidConfiguration { .. }));
    }
}
