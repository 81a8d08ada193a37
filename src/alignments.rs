//! The fixed catalog of every four-in-a-row line on the board
//!
//! Each entry is a 42-bit mask with exactly four bits set. The catalog is
//! built at compile time and is shared by victory detection and the
//! heuristic evaluator.

use static_assertions::*;

use crate::{bitboard::cell_mask, HEIGHT, WIDTH};

/// The number of cells in a winning line
pub const LINE_LENGTH: usize = 4;

/// 4 windows per row, 6 rows
pub const HORIZONTAL_COUNT: usize = (WIDTH - LINE_LENGTH + 1) * HEIGHT;
/// 3 windows per column, 7 columns
pub const VERTICAL_COUNT: usize = WIDTH * (HEIGHT - LINE_LENGTH + 1);
/// Per diagonal direction
pub const DIAGONAL_COUNT: usize = (WIDTH - LINE_LENGTH + 1) * (HEIGHT - LINE_LENGTH + 1);
/// The size of the full catalog
pub const ALIGNMENT_COUNT: usize = HORIZONTAL_COUNT + VERTICAL_COUNT + 2 * DIAGONAL_COUNT;

/// The orientation of a line
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum AlignmentKind {
    Horizontal,
    Vertical,
    /// Going up and to the right
    Rising,
    /// Going down and to the right
    Falling,
}

impl AlignmentKind {
    /// The order in which victory detection scans the catalog
    pub const VICTORY_ORDER: [AlignmentKind; 4] = [
        AlignmentKind::Horizontal,
        AlignmentKind::Vertical,
        AlignmentKind::Falling,
        AlignmentKind::Rising,
    ];
}

/// Mask of the line starting at (column, row) and stepping by (d_column, d_row)
const fn line(column: usize, row: usize, d_column: isize, d_row: isize) -> u64 {
    let mut mask = 0;
    let mut t = 0;
    while t < LINE_LENGTH as isize {
        let c = column as isize + t * d_column;
        let r = row as isize + t * d_row;
        mask |= cell_mask(c as usize, r as usize);
        t += 1;
    }
    mask
}

const fn horizontal_masks() -> [u64; HORIZONTAL_COUNT] {
    let mut masks = [0; HORIZONTAL_COUNT];
    let mut i = 0;
    let mut row = 0;
    while row < HEIGHT {
        let mut column = 0;
        while column + LINE_LENGTH <= WIDTH {
            masks[i] = line(column, row, 1, 0);
            i += 1;
            column += 1;
        }
        row += 1;
    }
    masks
}

const fn vertical_masks() -> [u64; VERTICAL_COUNT] {
    let mut masks = [0; VERTICAL_COUNT];
    let mut i = 0;
    let mut column = 0;
    while column < WIDTH {
        let mut row = 0;
        while row + LINE_LENGTH <= HEIGHT {
            masks[i] = line(column, row, 0, 1);
            i += 1;
            row += 1;
        }
        column += 1;
    }
    masks
}

const fn diagonal_masks(rising: bool) -> [u64; DIAGONAL_COUNT] {
    let mut masks = [0; DIAGONAL_COUNT];
    let mut i = 0;
    let mut column = 0;
    while column + LINE_LENGTH <= WIDTH {
        let mut row = 0;
        while row + LINE_LENGTH <= HEIGHT {
            masks[i] = if rising {
                line(column, row, 1, 1)
            } else {
                // start from the top-left end of the line
                line(column, row + LINE_LENGTH - 1, 1, -1)
            };
            i += 1;
            row += 1;
        }
        column += 1;
    }
    masks
}

/// Every candidate line on the board, grouped by orientation
pub struct AlignmentCatalog {
    horizontal: [u64; HORIZONTAL_COUNT],
    vertical: [u64; VERTICAL_COUNT],
    rising: [u64; DIAGONAL_COUNT],
    falling: [u64; DIAGONAL_COUNT],
}

impl AlignmentCatalog {
    const fn generate() -> Self {
        Self {
            horizontal: horizontal_masks(),
            vertical: vertical_masks(),
            rising: diagonal_masks(true),
            falling: diagonal_masks(false),
        }
    }

    pub fn masks(&self, kind: AlignmentKind) -> &[u64] {
        match kind {
            AlignmentKind::Horizontal => &self.horizontal,
            AlignmentKind::Vertical => &self.vertical,
            AlignmentKind::Rising => &self.rising,
            AlignmentKind::Falling => &self.falling,
        }
    }

    /// All masks, in victory scan order
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        AlignmentKind::VICTORY_ORDER
            .into_iter()
            .flat_map(move |kind| self.masks(kind).iter().copied())
    }

    /// For each cell, the number of lines passing through it.
    /// Indexed `[column][row]`.
    pub fn cell_participation(&self) -> [[u8; HEIGHT]; WIDTH] {
        let mut counts = [[0; HEIGHT]; WIDTH];
        for mask in self.iter() {
            for (column, column_counts) in counts.iter_mut().enumerate() {
                for (row, count) in column_counts.iter_mut().enumerate() {
                    if mask & cell_mask(column, row) != 0 {
                        *count += 1;
                    }
                }
            }
        }
        counts
    }

    const fn all_lines_have_four_cells(&self) -> bool {
        let mut i = 0;
        while i < HORIZONTAL_COUNT {
            if self.horizontal[i].count_ones() as usize != LINE_LENGTH {
                return false;
            }
            i += 1;
        }
        i = 0;
        while i < VERTICAL_COUNT {
            if self.vertical[i].count_ones() as usize != LINE_LENGTH {
                return false;
            }
            i += 1;
        }
        i = 0;
        while i < DIAGONAL_COUNT {
            if self.rising[i].count_ones() as usize != LINE_LENGTH
                || self.falling[i].count_ones() as usize != LINE_LENGTH
            {
                return false;
            }
            i += 1;
        }
        true
    }
}

const CATALOG: AlignmentCatalog = AlignmentCatalog::generate();

const_assert_eq!(ALIGNMENT_COUNT, 69);
const_assert!(CATALOG.all_lines_have_four_cells());

/// The alignment catalog, computed once at compile time
pub static ALIGNMENTS: AlignmentCatalog = CATALOG;
