//! Introspection of a single move decision

use std::time::Duration;

use crate::heuristic::{to_points, Score};

/// Counts the nodes visited during one `choose_move` call
#[derive(Copy, Clone, Default, Debug)]
pub struct NodeCounter(u64);

impl NodeCounter {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn increment(&mut self) {
        self.0 += 1;
    }

    pub fn count(&self) -> u64 {
        self.0
    }
}

/// How the engine arrived at its move
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Decision {
    /// The move completes a line for the engine
    ImmediateWin,
    /// The move occupies the cell the opponent needed
    ImmediateBlock,
    /// The move was chosen by the tree search
    Searched,
}

/// The score the tree search gave to one top-level column
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct CandidateScore {
    pub column: usize,
    pub score: Score,
    /// The opponent could win straight after this move, so the score was
    /// replaced by the worst value
    pub forced_loss: bool,
}

/// Everything recorded about the last move decision
#[derive(Clone, Debug)]
pub struct SearchReport {
    pub decision: Decision,
    pub column: usize,
    /// Empty unless the tree search ran
    pub candidates: Vec<CandidateScore>,
    pub node_count: u64,
    pub elapsed: Duration,
}

impl SearchReport {
    pub fn candidate(&self, column: usize) -> Option<&CandidateScore> {
        self.candidates.iter().find(|c| c.column == column)
    }

    /// Nodes per second, in thousands
    pub fn kilo_nodes_per_second(&self) -> f64 {
        self.node_count as f64 / (1000.0 * self.elapsed.as_secs_f64().max(f64::EPSILON))
    }

    /// One line per candidate, for logs
    pub fn score_trace(&self) -> String {
        self.candidates
            .iter()
            .map(|c| {
                if c.forced_loss {
                    format!("{}: forced loss", c.column + 1)
                } else {
                    format!("{}: {:.1}", c.column + 1, to_points(c.score))
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
