//! Core card logic - pure, in-memory and testable
//!
//! This crate holds the bingo grid, the free-cell rule, card assembly from a
//! label pool and win detection. It performs no I/O: pools arrive as plain
//! string slices and randomness is injected by the caller.
//!
//! # Module Structure
//!
//! - [`grid`]: NxN grid of cells, mark state and win detection
//! - [`card`]: builds a grid from a label pool with a single fair shuffle
//! - [`rng`]: draw-without-replacement label deck
//! - [`snapshot`]: serializable view of a grid
//! - [`error`]: typed errors for grid access and assembly
//!
//! # Example
//!
//! ```
//! use bingo_core::{assemble, rng};
//!
//! let pool: Vec<String> = ["A", "B", "C", "D", "E", "F", "G", "H", "I"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let mut rng = rng::seeded(7);
//! let mut grid = assemble(&pool, 3, false, &mut rng).unwrap();
//! assert!(!grid.is_complete());
//!
//! for i in 0..3 {
//!     grid.mark_cell(i, i).unwrap();
//! }
//! assert!(grid.is_complete());
//! ```

pub mod card;
pub mod error;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use bingo_types as types;

pub use card::{assemble, required_labels};
pub use error::{CardError, GridError};
pub use grid::{Cell, Grid};
pub use rng::LabelDeck;
pub use snapshot::{CardSnapshot, CellSnapshot};
