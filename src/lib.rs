//! An automated player for the 3D board game '4x4x4 Connect Four'
//!
//! Pieces are dropped into one of 16 vertical stacks on a 4x4 footprint and
//! a player wins by filling any straight line of 4 cells through the cube.
//! This agent looks a fixed number of plies ahead with a minimax search
//! using alpha-beta pruning and a heuristic line evaluation.
//!
//! # Basic Usage
//!
//! ```
//! use cube4_ai::{board::Board, search::Searcher, Player};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::from_moves(Player::B, Player::A, "05")?;
//! let mut searcher = Searcher::with_seed(Player::B, Player::A, 2, 7);
//! let (column, _score) = searcher.choose_move(&board);
//!
//! assert!(column.map_or(false, |c| !board.is_column_full(c)));
//!# Ok(())
//!# }
//! ```

use static_assertions::const_assert_eq;
pub use anyhow;

pub mod error;

pub mod board;

pub mod lines;

pub mod evaluation;

pub mod search;

pub mod game;

pub mod transport;


pub use board::{Cell, Player};
pub use error::{Error, Result};

/// The edge length of the cube in cells
pub const SIZE: usize = 4;

/// The number of vertical stacks pieces can be dropped into
pub const COLUMNS: usize = SIZE * SIZE;

/// The total number of cells in the cube
pub const CELLS: usize = SIZE * SIZE * SIZE;

/// The number of cells in a winning line
pub const LINE_LENGTH: usize = SIZE;

/// The number of distinct winning lines through the cube
pub const NUM_LINES: usize = 3 * SIZE * SIZE + 3 * 2 * SIZE + 4;

// a line must span the whole cube, every column is a full stack,
// and a 4-cube has exactly 76 lines
const_assert_eq!(LINE_LENGTH, SIZE);
const_assert_eq!(NUM_LINES, 76);
const_assert_eq!(CELLS, COLUMNS * SIZE);
