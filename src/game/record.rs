//! Game record: history of played actions and the final outcome

use serde::{Deserialize, Serialize};

use super::board::{Action, GameState, Player};

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal state, `None` while the game is still running
    pub fn of(state: &GameState) -> Option<Self> {
        if let Some(winner) = state.winner() {
            Some(GameOutcome::Win(winner))
        } else if state.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

/// A game with its move history
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    initial: GameState,
    current: GameState,
    moves: Vec<Action>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a game on an empty `size`×`size` board
    pub fn new(size: usize, win_length: usize) -> Result<Self, crate::Error> {
        Ok(Self::from_state(GameState::new(size, win_length)?))
    }

    /// Start a game from an arbitrary position
    pub fn from_state(state: GameState) -> Self {
        Game {
            outcome: GameOutcome::of(&state),
            initial: state.clone(),
            current: state,
            moves: Vec::new(),
        }
    }

    /// Play a move for the side to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has an outcome, or the
    /// error from [`GameState::result`] for an illegal action.
    pub fn play(&mut self, action: Action) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        self.current = self.current.result(action)?;
        self.moves.push(action);
        self.outcome = GameOutcome::of(&self.current);
        Ok(())
    }

    pub fn initial_state(&self) -> &GameState {
        &self.initial
    }

    pub fn current_state(&self) -> &GameState {
        &self.current
    }

    pub fn moves(&self) -> &[Action] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get the sequence of states from the initial position to the current one
    pub fn state_sequence(&self) -> Vec<GameState> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        states.push(self.initial.clone());

        let mut state = self.initial.clone();
        for &action in &self.moves {
            // every recorded move was validated by `play`
            state = state.child(action);
            states.push(state.clone());
        }

        states
    }
}
