use std::fmt;

use crate::{
    alignments::ALIGNMENTS,
    disc::DiscColor,
    error::ConnectError,
    grid::Grid,
    HEIGHT, WIDTH,
};

/*
 * Bit indices of each cell, one bitset per colour:
 *
 * 5  11  17  23  29  35  41
 * 4  10  16  22  28  34  40
 * 3   9  15  21  27  33  39
 * 2   8  14  20  26  32  38
 * 1   7  13  19  25  31  37
 * 0   6  12  18  24  30  36
 */

/// Mask of a single cell
pub const fn cell_mask(column: usize, row: usize) -> u64 {
    1 << (column * HEIGHT + row)
}

pub const fn top_mask(column: usize) -> u64 {
    cell_mask(column, HEIGHT - 1)
}

pub const fn bottom_mask(column: usize) -> u64 {
    cell_mask(column, 0)
}

pub const fn column_mask(column: usize) -> u64 {
    ((1 << HEIGHT) - 1) << (column * HEIGHT)
}

/// An immutable snapshot of the board
///
/// Every move produces a new `BitBoard`. Boards built with [`BitBoard::apply_move`]
/// never have a cell claimed by both colours and never have floating discs.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct BitBoard {
    red_discs: u64,
    black_discs: u64,
}

impl BitBoard {
    pub fn new() -> Self {
        Self {
            red_discs: 0,
            black_discs: 0,
        }
    }

    /// Builds a board directly from the two colour masks, without checking them
    pub fn from_masks(red_discs: u64, black_discs: u64) -> Self {
        Self {
            red_discs,
            black_discs,
        }
    }

    /// Parses a sequence of 1-indexed column digits, Black playing first
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, ConnectError> {
        let mut board = Self::new();
        let mut color = DiscColor::Black;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    // abort if the position is won at any point
                    if board.winner() != DiscColor::None {
                        return Err(ConnectError::GameOver);
                    }
                    board = board.apply_move(column - 1, color)?;
                    color = color.opponent();
                }
                _ => return Err(ConnectError::InvalidMoveChar(column_char)),
            }
        }
        Ok(board)
    }

    /// Builds a board from a full-grid view, rejecting floating discs
    pub fn from_grid(grid: &Grid) -> Result<Self, ConnectError> {
        let mut board = Self::new();
        for column in 0..WIDTH {
            for row in 0..HEIGHT {
                match grid.get(column, row) {
                    DiscColor::Red => board.red_discs |= cell_mask(column, row),
                    DiscColor::Black => board.black_discs |= cell_mask(column, row),
                    DiscColor::None => {}
                }
            }
        }
        board.validate()?;
        Ok(board)
    }

    pub fn to_grid(&self) -> Grid {
        let mut grid = Grid::empty();
        for column in 0..WIDTH {
            for row in 0..HEIGHT {
                grid.set(column, row, self.cell(column, row));
            }
        }
        grid
    }

    pub fn red_discs(&self) -> u64 {
        self.red_discs
    }

    pub fn black_discs(&self) -> u64 {
        self.black_discs
    }

    /// Mask of the discs of one colour, empty for `None`
    pub fn discs(&self, color: DiscColor) -> u64 {
        match color {
            DiscColor::Red => self.red_discs,
            DiscColor::Black => self.black_discs,
            DiscColor::None => 0,
        }
    }

    /// Mask of all occupied cells
    pub fn occupied(&self) -> u64 {
        self.red_discs | self.black_discs
    }

    pub fn disc_count(&self) -> usize {
        self.occupied().count_ones() as usize
    }

    pub fn cell(&self, column: usize, row: usize) -> DiscColor {
        let mask = cell_mask(column, row);
        if self.red_discs & mask != 0 {
            DiscColor::Red
        } else if self.black_discs & mask != 0 {
            DiscColor::Black
        } else {
            DiscColor::None
        }
    }

    /// True if the top cell of the column is empty, false for columns off the board
    pub fn is_column_open(&self, column: usize) -> bool {
        column < WIDTH && top_mask(column) & self.occupied() == 0
    }

    /// Open columns in ascending order, empty when the board is full
    pub fn open_columns(&self) -> impl Iterator<Item = usize> {
        let board = *self;
        (0..WIDTH).filter(move |&column| board.is_column_open(column))
    }

    pub fn is_full(&self) -> bool {
        self.open_columns().next().is_none()
    }

    /// Drops a disc of `color` into the lowest empty cell of `column`
    pub fn apply_move(&self, column: usize, color: DiscColor) -> Result<Self, ConnectError> {
        let color = color.require_definite()?;
        if column >= WIDTH {
            return Err(ConnectError::InvalidColumn(column));
        }
        if !self.is_column_open(column) {
            return Err(ConnectError::ColumnFull(column));
        }
        Ok(self.drop_disc(column, color))
    }

    /// `apply_move` without the checks, for callers that already know the
    /// column is open and the colour is definite
    pub(crate) fn drop_disc(&self, column: usize, color: DiscColor) -> Self {
        debug_assert!(self.is_column_open(column));
        // discs are stacked from the bottom, so adding the bottom bit carries
        // into the first empty cell
        let move_bitmap =
            ((self.occupied() & column_mask(column)) + bottom_mask(column)) & column_mask(column);
        match color {
            DiscColor::Red => Self::from_masks(self.red_discs | move_bitmap, self.black_discs),
            DiscColor::Black => Self::from_masks(self.red_discs, self.black_discs | move_bitmap),
            DiscColor::None => *self,
        }
    }

    /// Returns the colour owning a complete line, or `None`
    ///
    /// Fails with `CorruptState` if a cell is claimed by both colours.
    pub fn check_victory(&self) -> Result<DiscColor, ConnectError> {
        self.check_disjoint()?;
        Ok(self.winner())
    }

    /// Victory detection for boards already known to be consistent
    pub(crate) fn winner(&self) -> DiscColor {
        for mask in ALIGNMENTS.iter() {
            if mask & self.red_discs == mask {
                return DiscColor::Red;
            }
            if mask & self.black_discs == mask {
                return DiscColor::Black;
            }
        }
        DiscColor::None
    }

    /// True if `color` playing in `column` completes a line
    pub fn is_winning_move(&self, column: usize, color: DiscColor) -> bool {
        self.is_column_open(column)
            && color.is_definite()
            && self.drop_disc(column, color).winner() == color
    }

    /// Checks both board invariants: no shared cells and no floating discs
    pub fn validate(&self) -> Result<(), ConnectError> {
        self.check_disjoint()?;
        let occupied = self.occupied();
        for column in 0..WIDTH {
            let stack = (occupied & column_mask(column)) >> (column * HEIGHT);
            // a gap-free stack from the bottom is a run of low bits
            if stack & (stack + 1) != 0 {
                let row = (stack + 1).trailing_zeros() as usize;
                return Err(ConnectError::FloatingDisc { column, row });
            }
        }
        Ok(())
    }

    fn check_disjoint(&self) -> Result<(), ConnectError> {
        let overlap = self.red_discs & self.black_discs;
        if overlap != 0 {
            return Err(ConnectError::CorruptState { overlap });
        }
        Ok(())
    }
}

impl fmt::Display for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            let line: String = (0..WIDTH)
                .map(|column| self.cell(column, row).symbol())
                .collect();
            writeln!(f, "{}", line)?;
        }
        let columns: String = (1..=WIDTH).map(|x| x.to_string()).collect();
        write!(f, "{}", columns)
    }
}
