//! __golife-lib__ simulates Conway's Game of Life on a fixed-size board.
//!
//! The whole crate is the [`Board`]: an owned grid of boolean cell states
//! with direct cell editing, clearing, randomization, generation advancement
//! under the standard B3/S23 rule, and fixed-point ("stall") detection.
//! Cells outside the board read as permanently dead and there is no
//! wraparound.
//!
//! # Example
//!
//! ```
//! use golife_lib::Board;
//!
//! // A blinker on a 5x5 board.
//! let mut board = Board::new(5, 5);
//! board.set_at(1, 2, true);
//! board.set_at(2, 2, true);
//! board.set_at(3, 2, true);
//!
//! board.advance();
//! assert!(board.get_at(2, 1) && board.get_at(2, 2) && board.get_at(2, 3));
//! assert!(!board.is_stalled());
//! ```

mod board;

pub use board::Board;
