//! Terminal card rendering.
//!
//! Turns a grid into monospaced, box-drawn text and flushes it to a console.
//!
//! Pipeline:
//! - [`card_view`] picks the text of every cell (plain labels or mark glyphs)
//! - [`layout`] word-wraps the label matrix into one shared cell box
//! - [`table`] draws borders and padded cell lines, optionally as ASCII
//! - [`renderer`] writes the result through crossterm

pub mod card_view;
pub mod layout;
pub mod renderer;
pub mod table;

pub use bingo_core as core;

pub use card_view::{CardView, CellText};
pub use layout::{wrap, LayoutError, WrappedTable};
pub use renderer::{encode_card_into, ConsoleRenderer};
pub use table::{render, render_lines, to_ascii};
