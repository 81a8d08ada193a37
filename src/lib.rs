//! A heuristic agent for playing the board game 'Connect 4'
//!
//! The agent keeps the board as a pair of bitsets, scores positions by
//! counting partially filled winning lines, and picks moves with a
//! depth-bounded minimax search using alpha-beta pruning. Immediate wins
//! and immediate blocks are played without searching.
//!
//! # Basic Usage
//!
//! ```
//! use connect_bot::{bitboard::BitBoard, config::SearchConfig, disc::DiscColor, search::Engine};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // Red has three discs stacked in the first column, Black must block
//! let board = BitBoard::from_moves("213121")?;
//! let mut engine = Engine::new(SearchConfig::default())?;
//!
//! assert_eq!(engine.choose_move(&board, DiscColor::Black)?, 0);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod disc;

pub mod alignments;

pub mod bitboard;

pub mod grid;

pub mod heuristic;

pub mod diagnostics;

pub mod search;

pub mod config;

pub mod error;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of addressable cells, one bit each
pub const CELL_COUNT: usize = WIDTH * HEIGHT;

// ensure that the given dimensions fit in a u64 for the bitboard representation
const_assert!(CELL_COUNT <= 64);
