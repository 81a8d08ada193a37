//! An agent to choose moves in Connect 4

use std::time::Instant;

use log::{debug, info, warn};
use static_assertions::*;

use crate::{
    bitboard::BitBoard,
    config::SearchConfig,
    diagnostics::{CandidateScore, Decision, NodeCounter, SearchReport},
    disc::DiscColor,
    error::{ConfigError, ConnectError},
    heuristic::{evaluate, to_points, Score, MAX_HEURISTIC},
};

/// Upper bound of the alpha-beta window
pub const POS_INFINITY: Score = Score::MAX;
/// Lower bound of the alpha-beta window
pub const NEG_INFINITY: Score = -Score::MAX;

/// Score of a position the search finds already won, signed toward the winner
pub const WIN_SCORE: Score = 100_000_000;

// a found win outranks every heuristic total and stays orderable inside the window
const_assert!(WIN_SCORE > MAX_HEURISTIC);
const_assert!(WIN_SCORE < POS_INFINITY);

/// An agent choosing a column for a given colour
///
/// # Notes
/// Before searching, the engine plays any move that wins on the spot, then
/// any move that takes the cell the opponent needs to win on the spot.
/// Otherwise every open column is scored with a fixed-depth minimax search
/// with alpha-beta pruning, and the column with the lowest score is played
/// (ties go to the leftmost column).
///
/// # Position Scoring
/// Scores follow [`evaluate`]: positive favours Black, negative favours Red.
/// A position where a line is already complete scores `±WIN_SCORE`. A move
/// which lets the opponent win straight away scores `POS_INFINITY`.
///
/// The top-level candidates are always scored through the minimizing side,
/// whichever colour the engine plays.
#[derive(Clone, Debug)]
pub struct Engine {
    config: SearchConfig,
    last_report: Option<SearchReport>,
}

impl Engine {
    /// Fails with `ConfigError::Validation` if the depth is out of range
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            last_report: None,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Diagnostics of the most recent `choose_move` call
    pub fn last_report(&self) -> Option<&SearchReport> {
        self.last_report.as_ref()
    }

    /// Returns the column `color` should play on `board`
    ///
    /// Fails with `InvalidColor` for `DiscColor::None`, `NoLegalMove` on a full
    /// board, and `CorruptState` or `FloatingDisc` if the board breaks an invariant.
    pub fn choose_move(&mut self, board: &BitBoard, color: DiscColor) -> Result<usize, ConnectError> {
        let color = color.require_definite()?;
        board.validate()?;
        if board.is_full() {
            return Err(ConnectError::NoLegalMove);
        }

        let start = Instant::now();
        let mut counter = NodeCounter::new();

        let (decision, column, candidates) =
            if let Some(column) = find_winning_move(board, color) {
                (Decision::ImmediateWin, column, Vec::new())
            } else if let Some(column) = find_winning_move(board, color.opponent()) {
                (Decision::ImmediateBlock, column, Vec::new())
            } else {
                let candidates = self.score_candidates(board, color, &mut counter);
                let column = select_candidate(&candidates).ok_or(ConnectError::NoLegalMove)?;
                if candidates.iter().all(|c| c.forced_loss) {
                    warn!("{} cannot stop an immediate loss", color);
                }
                (Decision::Searched, column, candidates)
            };

        let report = SearchReport {
            decision,
            column,
            candidates,
            node_count: counter.count(),
            elapsed: start.elapsed(),
        };
        info!(
            "{} plays column {} ({:?}), {} nodes in {:.3}ms",
            color,
            column + 1,
            decision,
            report.node_count,
            report.elapsed.as_secs_f64() * 1000.0
        );
        if !report.candidates.is_empty() {
            debug!("candidate scores: {}", report.score_trace());
        }

        self.last_report = Some(report);
        Ok(column)
    }

    /// Scores every open column for `color` with the tree search
    fn score_candidates(
        &self,
        board: &BitBoard,
        color: DiscColor,
        counter: &mut NodeCounter,
    ) -> Vec<CandidateScore> {
        // validated on construction, so at most one less than the cell count
        let depth = self.config.max_depth as i32 - 1;
        let opponent = color.opponent();

        board
            .open_columns()
            .map(|column| {
                let child = board.drop_disc(column, color);
                let mut score = minimize(&child, depth, NEG_INFINITY, POS_INFINITY, opponent, counter);

                // never hand the opponent a win, whatever the deeper search said
                let forced_loss = find_winning_move(&child, opponent).is_some();
                if forced_loss {
                    score = POS_INFINITY;
                }
                debug!(
                    "column {}: score {:.1}{}",
                    column + 1,
                    to_points(score),
                    if forced_loss { " (forced loss)" } else { "" }
                );
                CandidateScore {
                    column,
                    score,
                    forced_loss,
                }
            })
            .collect()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
            last_report: None,
        }
    }
}

/// The leftmost open column where `color` completes a line, if any
pub fn find_winning_move(board: &BitBoard, color: DiscColor) -> Option<usize> {
    board
        .open_columns()
        .find(|&column| board.is_winning_move(column, color))
}

/// Picks the candidate with the strictly smallest score, keeping the first on ties
fn select_candidate(candidates: &[CandidateScore]) -> Option<usize> {
    let mut best: Option<&CandidateScore> = None;
    for candidate in candidates {
        match best {
            Some(current) if candidate.score >= current.score => {}
            _ => best = Some(candidate),
        }
    }
    best.map(|c| c.column)
}

/// Score of a leaf or decided position, `None` if the search must go deeper
fn terminal_score(board: &BitBoard, depth: i32) -> Option<Score> {
    if depth <= 0 || board.is_full() {
        return Some(evaluate(board));
    }
    match board.winner() {
        DiscColor::None => None,
        winner => Some(WIN_SCORE * winner.sign()),
    }
}

/// Alpha-beta search where the side to move picks the highest score
pub(crate) fn maximize(
    board: &BitBoard,
    depth: i32,
    mut alpha: Score,
    beta: Score,
    to_move: DiscColor,
    counter: &mut NodeCounter,
) -> Score {
    counter.increment();
    if let Some(score) = terminal_score(board, depth) {
        return score;
    }

    let mut value = NEG_INFINITY;
    for column in board.open_columns() {
        let child = board.drop_disc(column, to_move);
        value = value.max(minimize(&child, depth - 1, alpha, beta, to_move.opponent(), counter));
        // the minimizing parent already has something better
        if value >= beta {
            return value;
        }
        alpha = alpha.max(value);
    }
    value
}

/// Alpha-beta search where the side to move picks the lowest score
pub(crate) fn minimize(
    board: &BitBoard,
    depth: i32,
    alpha: Score,
    mut beta: Score,
    to_move: DiscColor,
    counter: &mut NodeCounter,
) -> Score {
    counter.increment();
    if let Some(score) = terminal_score(board, depth) {
        return score;
    }

    let mut value = POS_INFINITY;
    for column in board.open_columns() {
        let child = board.drop_disc(column, to_move);
        value = value.min(maximize(&child, depth - 1, alpha, beta, to_move.opponent(), counter));
        // the maximizing parent already has something better
        if value <= alpha {
            return value;
        }
        beta = beta.min(value);
    }
    value
}
