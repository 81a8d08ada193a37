//! A column-by-column view of a board, for presentation
//!
//! A `Grid` is always derived from a [`BitBoard`](crate::bitboard::BitBoard)
//! with `to_grid`, or turned back into one with `BitBoard::from_grid`. It is
//! never used as an independent source of truth.

use crate::{disc::DiscColor, HEIGHT, WIDTH};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    // cells are stored column by column, bottom-to-top
    cells: [[DiscColor; HEIGHT]; WIDTH],
}

impl Grid {
    pub fn empty() -> Self {
        Self {
            cells: [[DiscColor::None; HEIGHT]; WIDTH],
        }
    }

    pub fn get(&self, column: usize, row: usize) -> DiscColor {
        self.cells[column][row]
    }

    pub fn set(&mut self, column: usize, row: usize, color: DiscColor) {
        self.cells[column][row] = color;
    }

    /// The cells of one column, bottom first
    pub fn column(&self, column: usize) -> &[DiscColor; HEIGHT] {
        &self.cells[column]
    }

    /// Rows from the top of the board down, the order they are drawn in
    pub fn rows_top_down(&self) -> impl Iterator<Item = [DiscColor; WIDTH]> + '_ {
        (0..HEIGHT).rev().map(move |row| {
            let mut line = [DiscColor::None; WIDTH];
            for (column, cell) in line.iter_mut().enumerate() {
                *cell = self.cells[column][row];
            }
            line
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::empty()
    }
}
