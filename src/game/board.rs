//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Utility of a won position, from X's point of view.
pub const WIN_SCORE: i32 = 10_000;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A (row, column) coordinate on the board.
///
/// The derived ordering is lexicographic: row first, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Immutable snapshot of an m×m board with win length k and the side to move.
///
/// Every move produces a new `GameState`; the parent is never modified, so a
/// state can be shared freely between branches of the search tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameState {
    cells: Vec<Cell>,
    size: usize,
    win_length: usize,
    to_move: Player,
}

impl GameState {
    /// Create an empty `size`×`size` board with X to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimensions`] unless `0 < win_length <= size`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mnk::game::{GameState, Player};
    ///
    /// let state = GameState::new(3, 3).unwrap();
    /// assert_eq!(state.to_move(), Player::X);
    /// assert_eq!(state.actions().len(), 9);
    /// assert!(GameState::new(3, 4).is_err());
    /// ```
    pub fn new(size: usize, win_length: usize) -> Result<Self, crate::Error> {
        Self::check_dimensions(size, win_length)?;
        Ok(GameState {
            cells: vec![Cell::Empty; size * size],
            size,
            win_length,
            to_move: Player::X,
        })
    }

    pub(crate) fn check_dimensions(size: usize, win_length: usize) -> Result<(), crate::Error> {
        if size == 0 || win_length == 0 || win_length > size {
            return Err(crate::Error::InvalidDimensions {
                m: size,
                k: win_length,
            });
        }
        Ok(())
    }

    /// Assemble a state from already-validated parts.
    pub(crate) fn from_parts(
        cells: Vec<Cell>,
        size: usize,
        win_length: usize,
        to_move: Player,
    ) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        GameState {
            cells,
            size,
            win_length,
            to_move,
        }
    }

    /// Board side length (m)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Marks in a row needed to win (k)
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Cells in row-major order
    pub fn board(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over the rows of the board
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Get the cell at `action`, or `None` when it lies off the board
    pub fn cell(&self, action: Action) -> Option<Cell> {
        self.contains(action)
            .then(|| self.cells[self.index(action)])
    }

    fn contains(&self, action: Action) -> bool {
        action.row < self.size && action.col < self.size
    }

    fn index(&self, action: Action) -> usize {
        action.row * self.size + action.col
    }

    /// Get all empty cells in (row, column) order
    pub fn actions(&self) -> Vec<Action> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Action::new(i / self.size, i % self.size))
            .collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Place the mover's mark at `action` and return the resulting state.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] for coordinates off the board and
    /// [`crate::Error::Occupied`] when the cell already holds a mark.
    #[must_use = "result returns a new game state; the original is unchanged"]
    pub fn result(&self, action: Action) -> Result<GameState, crate::Error> {
        if !self.contains(action) {
            return Err(crate::Error::OutOfBounds {
                row: action.row,
                col: action.col,
                size: self.size,
            });
        }

        if self.cells[self.index(action)] != Cell::Empty {
            return Err(crate::Error::Occupied {
                row: action.row,
                col: action.col,
            });
        }

        Ok(self.child(action))
    }

    /// Apply an action taken from [`GameState::actions`] without re-checking it.
    pub(crate) fn child(&self, action: Action) -> GameState {
        debug_assert_eq!(self.cell(action), Some(Cell::Empty));
        let mut next = self.clone();
        let idx = self.index(action);
        next.cells[idx] = self.to_move.to_cell();
        next.to_move = self.to_move.opponent();
        next
    }

    /// Check if a player has k marks in a row anywhere on the board
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, self.size, self.win_length, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    /// Exact value of a finished game: `WIN_SCORE` for X, `-WIN_SCORE` for O, 0 otherwise
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => WIN_SCORE,
            Some(Player::O) => -WIN_SCORE,
            None => 0,
        }
    }

    /// Compact key: cells row-major, then the side to move, e.g. `X...O...._X`
    pub fn encode(&self) -> String {
        format!(
            "{}_{}",
            self.cells.iter().map(|&c| c.to_char()).collect::<String>(),
            self.to_move
        )
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: GameState, moves: &[(usize, usize)]) -> GameState {
        moves.iter().fold(state, |s, &mv| s.result(mv.into()).unwrap())
    }

    #[test]
    fn test_new_board() {
        let board = GameState::new(4, 3).unwrap();
        assert_eq!(board.to_move(), Player::X);
        assert_eq!(board.size(), 4);
        assert_eq!(board.win_length(), 3);
        assert!(board.board().iter().all(|&c| c == Cell::Empty));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(GameState::new(0, 0).is_err());
        assert!(GameState::new(3, 0).is_err());
        let err = GameState::new(3, 4).unwrap_err();
        assert!(err.to_string().contains("win length 4"));
    }

    #[test]
    fn test_result_places_mark_and_switches_turn() {
        let board = GameState::new(3, 3).unwrap();
        let next = board.result(Action::new(1, 1)).unwrap();

        assert_eq!(next.cell(Action::new(1, 1)), Some(Cell::X));
        assert_eq!(next.to_move(), Player::O);
        // parent untouched
        assert_eq!(board.cell(Action::new(1, 1)), Some(Cell::Empty));
        assert_eq!(board.to_move(), Player::X);
    }

    #[test]
    fn test_result_rejects_occupied_and_out_of_bounds() {
        let board = play(GameState::new(3, 3).unwrap(), &[(0, 0)]);

        let occupied = board.result(Action::new(0, 0)).unwrap_err();
        assert!(occupied.to_string().contains("occupied"));

        let outside = board.result(Action::new(3, 0)).unwrap_err();
        assert!(outside.to_string().contains("out of bounds"));
    }

    #[test]
    fn test_actions_are_lexicographic() {
        let board = play(GameState::new(3, 3).unwrap(), &[(1, 1), (0, 2)]);
        let actions = board.actions();
        assert_eq!(actions.len(), 7);
        assert!(actions.windows(2).all(|w| w[0] < w[1]));
        assert!(!actions.contains(&Action::new(1, 1)));
    }

    #[test]
    fn test_winner_row() {
        let board = play(
            GameState::new(3, 3).unwrap(),
            &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
        );
        assert_eq!(board.winner(), Some(Player::X));
        assert!(board.is_terminal());
        assert_eq!(board.utility(), WIN_SCORE);
    }

    #[test]
    fn test_o_win_utility() {
        // O completes the middle column
        let board = play(
            GameState::new(3, 3).unwrap(),
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 1)],
        );
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.utility(), -WIN_SCORE);
    }

    #[test]
    fn test_draw_detection() {
        // X O X
        // X O O
        // O X X
        let board = play(
            GameState::new(3, 3).unwrap(),
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 1),
                (1, 0),
                (1, 2),
                (2, 1),
                (2, 0),
                (2, 2),
            ],
        );
        assert!(board.is_full());
        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);
        assert_eq!(board.utility(), 0);
        assert!(board.actions().is_empty());
    }

    #[test]
    fn test_encode_and_display() {
        let board = play(GameState::new(3, 3).unwrap(), &[(0, 0), (1, 1)]);
        assert_eq!(board.encode(), "X...O...._X");
        assert_eq!(board.to_string(), "X..\n.O.\n...");
    }
}
