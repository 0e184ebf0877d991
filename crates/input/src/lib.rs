//! Console input module.
//!
//! This module is independent of any terminal framework. It maps typed lines
//! into menu selections and card sizes, and provides a small
//! prompter over any `BufRead`/`Write` pair so the interactive loops can be
//! driven from tests.

pub mod map;
pub mod prompt;

pub use bingo_types as types;

pub use map::{parse_size, select_name};
pub use prompt::Prompter;
