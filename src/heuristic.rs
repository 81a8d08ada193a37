//! Static evaluation of a position
//!
//! A line is scorable for a colour when the opponent has no disc in it and
//! the colour has at least one. Each scorable line contributes according to
//! how many discs of that colour it already holds. The final score is
//! Black's total minus Red's total.

use static_assertions::*;

use crate::{
    alignments::{AlignmentKind, ALIGNMENTS, ALIGNMENT_COUNT, LINE_LENGTH},
    bitboard::BitBoard,
    disc::DiscColor,
};

/// Fixed-point score, in tenths of a point
pub type Score = i32;

/// Number of `Score` units in one point
pub const SCORE_SCALE: Score = 10;

/// The contribution of a scorable line, indexed by disc count
pub struct ScoringTable([Score; LINE_LENGTH + 1]);

impl ScoringTable {
    pub const fn line_value(&self, discs: usize) -> Score {
        self.0[discs]
    }
}

/// Value of a line holding four discs of the same colour. Only reached when a
/// won board is evaluated at the search horizon.
pub const FOUR_ALIGNED: Score = 100_000;

/// 0.0, 0.2, 0.6, 1.2 and the four-aligned sentinel
pub const SCORING_TABLE: ScoringTable = ScoringTable([0, 2, 6, 12, FOUR_ALIGNED]);

/// The largest magnitude `evaluate` can return
pub const MAX_HEURISTIC: Score = ALIGNMENT_COUNT as Score * FOUR_ALIGNED;

// the catalog can never overflow the score type
const_assert!((ALIGNMENT_COUNT as i64) * (FOUR_ALIGNED as i64) < i32::MAX as i64);

/// Total value of the lines of one orientation still open to `color`
///
/// `DiscColor::None` holds no lines and scores 0.
pub fn score_lines(board: &BitBoard, kind: AlignmentKind, color: DiscColor) -> Score {
    let own = board.discs(color);
    let opponent = board.discs(color.opponent());

    ALIGNMENTS
        .masks(kind)
        .iter()
        .filter(|&&mask| mask & opponent == 0)
        .map(|&mask| SCORING_TABLE.line_value((mask & own).count_ones() as usize))
        .sum()
}

/// Scores a board, positive favouring Black and negative favouring Red
pub fn evaluate(board: &BitBoard) -> Score {
    // contested lines score nothing for either side
    AlignmentKind::VICTORY_ORDER
        .into_iter()
        .map(|kind| {
            score_lines(board, kind, DiscColor::Black) - score_lines(board, kind, DiscColor::Red)
        })
        .sum()
}

/// Converts a score to points, for display
pub fn to_points(score: Score) -> f64 {
    score as f64 / SCORE_SCALE as f64
}
