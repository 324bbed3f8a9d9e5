//! Static evaluation of positions for depth-limited search
//!
//! Scores are from X's point of view: positive favours X, negative favours O.
//! A decided position always scores exactly [`WIN_SCORE`] in magnitude, which
//! dominates any line count on boards of practical size.

use serde::{Deserialize, Serialize};

use crate::game::{Cell, GameState, Player, WIN_SCORE};

/// Leaf evaluator used by depth-limited search and by probe move ordering.
///
/// Any `Fn(&GameState) -> i32` is an evaluator, so plain functions such as
/// [`evaluate`] can be passed directly.
pub trait Evaluator {
    fn evaluate(&self, state: &GameState) -> i32;
}

impl<F> Evaluator for F
where
    F: Fn(&GameState) -> i32,
{
    fn evaluate(&self, state: &GameState) -> i32 {
        self(state)
    }
}

/// Open-line counting heuristic.
///
/// Each scored line contributes the number of marks in it when only one
/// player occupies it, signed by that player; mixed and empty lines score 0.
/// Rows and columns are always scored; the two long diagonals only when
/// `include_diagonals` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineHeuristic {
    pub include_diagonals: bool,
}

impl LineHeuristic {
    pub fn new(include_diagonals: bool) -> Self {
        Self { include_diagonals }
    }

    fn score_line(cells: impl Iterator<Item = Cell>) -> i32 {
        let (mut x, mut o) = (0, 0);
        for cell in cells {
            match cell {
                Cell::X => x += 1,
                Cell::O => o += 1,
                Cell::Empty => {}
            }
        }
        match (x, o) {
            (x, 0) => x,
            (0, o) => -o,
            _ => 0,
        }
    }
}

impl Evaluator for LineHeuristic {
    fn evaluate(&self, state: &GameState) -> i32 {
        match state.winner() {
            Some(Player::X) => return WIN_SCORE,
            Some(Player::O) => return -WIN_SCORE,
            None => {}
        }

        let size = state.size();
        let cells = state.board();

        let rows: i32 = state
            .rows()
            .map(|row| Self::score_line(row.iter().copied()))
            .sum();
        let columns: i32 = (0..size)
            .map(|col| Self::score_line((0..size).map(|row| cells[row * size + col])))
            .sum();

        let diagonals = if self.include_diagonals {
            Self::score_line((0..size).map(|i| cells[i * size + i]))
                + Self::score_line((0..size).map(|i| cells[i * size + (size - 1 - i)]))
        } else {
            0
        };

        rows + columns + diagonals
    }
}

/// Score `state` with the row/column line heuristic.
///
/// # Examples
///
/// ```
/// use mnk::{evaluate, game::GameState};
///
/// // X owns row 0 and column 0 (1 each); O's row 1 and column 1 cancel them.
/// let state = GameState::from_string("X.../.O../..../....", 3).unwrap();
/// assert_eq!(evaluate(&state), 0);
/// ```
pub fn evaluate(state: &GameState) -> i32 {
    LineHeuristic::default().evaluate(state)
}
