//! Line analysis for k-in-a-row boards

use super::{Cell, Player};

/// Scan directions as (row step, column step): horizontal, vertical,
/// main diagonal, anti-diagonal.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Utility for analyzing lines on a row-major `size`×`size` board
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if `player` holds `win_length` consecutive cells in any direction.
    ///
    /// Every window of length `win_length` is considered, so on boards larger
    /// than the win length a run may start anywhere along a line.
    pub fn has_won(cells: &[Cell], size: usize, win_length: usize, player: Player) -> bool {
        let target = player.to_cell();

        (0..size * size)
            .filter(|&idx| cells[idx] == target)
            .any(|idx| {
                DIRECTIONS.iter().any(|&(dr, dc)| {
                    Self::window(size, win_length, idx / size, idx % size, dr, dc)
                        .is_some_and(|mut window| window.all(|i| cells[i] == target))
                })
            })
    }

    /// Indices of the `len` cells starting at (`row`, `col`) and stepping by
    /// (`dr`, `dc`), or `None` if the window leaves the board.
    pub fn window(
        size: usize,
        len: usize,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
    ) -> Option<impl Iterator<Item = usize>> {
        if len == 0 {
            return None;
        }

        let last = (len - 1) as isize;
        let end_row = row as isize + dr * last;
        let end_col = col as isize + dc * last;
        let bound = size as isize;
        if end_row < 0 || end_col < 0 || end_row >= bound || end_col >= bound {
            return None;
        }

        Some((0..len as isize).map(move |i| {
            let r = (row as isize + dr * i) as usize;
            let c = (col as isize + dc * i) as usize;
            r * size + c
        }))
    }
}
