//! Board parsing and validation logic

use super::board::{Cell, GameState, Player};

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
}

fn count_pieces(cells: &[Cell]) -> PieceCount {
    cells.iter().fold(PieceCount { x: 0, o: 0 }, |mut count, cell| {
        match cell {
            Cell::X => count.x += 1,
            Cell::O => count.o += 1,
            Cell::Empty => {}
        }
        count
    })
}

fn determine_turn_from_counts(count: PieceCount) -> Result<Player, crate::Error> {
    if count.x == count.o {
        Ok(Player::X)
    } else if count.x == count.o + 1 {
        Ok(Player::O)
    } else {
        Err(crate::Error::InvalidPieceCounts {
            x_count: count.x,
            o_count: count.o,
        })
    }
}

impl GameState {
    /// Create a board from a string representation.
    ///
    /// Whitespace and `/` row separators are ignored; the remaining characters
    /// must form a square board. The side to move is inferred from the piece
    /// counts with X moving first.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The cell count is zero or not a perfect square
    /// - Any character is not a valid cell representation
    /// - The piece counts are invalid (O ahead, or X ahead by more than one)
    /// - `win_length` does not fit the board
    ///
    /// # Examples
    ///
    /// ```
    /// use mnk::game::{GameState, Player};
    ///
    /// let state = GameState::from_string("X.O/.X./...", 3).unwrap();
    /// assert_eq!(state.size(), 3);
    /// assert_eq!(state.to_move(), Player::O);
    /// ```
    pub fn from_string(s: &str, win_length: usize) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();

        let size = chars.len().isqrt();
        if chars.is_empty() || size * size != chars.len() {
            return Err(crate::Error::InvalidBoardLength {
                got: chars.len(),
                context: s.to_string(),
            });
        }
        Self::check_dimensions(size, win_length)?;

        let cells = chars
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let to_move = determine_turn_from_counts(count_pieces(&cells))?;
        Ok(GameState::from_parts(cells, size, win_length, to_move))
    }

    /// Check if the board state could arise from X-first play.
    pub fn is_valid(&self) -> bool {
        let count = count_pieces(self.board());

        let Ok(expected_turn) = determine_turn_from_counts(count) else {
            return false;
        };
        if self.to_move() != expected_turn {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }

        // The winner must have made the last move
        if x_wins && count.x != count.o + 1 {
            return false;
        }
        if o_wins && count.x != count.o {
            return false;
        }

        true
    }
}
