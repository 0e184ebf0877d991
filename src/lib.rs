//! Bingo cards (workspace facade crate).
//!
//! Re-exports the member crates under short names and adds the pieces the
//! `bingo` binary is built from: configuration, card sessions, the console
//! game loop and PDF export.

pub mod config;
pub mod export;
pub mod game;
pub mod session;

pub use bingo_core as core;
pub use bingo_input as input;
pub use bingo_pdf as pdf;
pub use bingo_store as store;
pub use bingo_term as term;
pub use bingo_types as types;
