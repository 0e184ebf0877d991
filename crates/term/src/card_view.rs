//! CardView: maps a `core::Grid` into a rendered table.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Cell, Grid};
use crate::layout::{wrap, LayoutError, WrappedTable};
use crate::table::{render, render_lines, to_ascii};

/// Which text each cell contributes to the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellText {
    /// Labels only, for printed cards
    #[default]
    Label,
    /// Mark glyph followed by the label; free cells stay `FREE`
    WithMark,
}

/// Renders cards as box-drawn tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardView {
    text: CellText,
    ascii: bool,
}

impl CardView {
    /// Labels only: what goes on paper.
    pub fn print() -> Self {
        Self {
            text: CellText::Label,
            ascii: false,
        }
    }

    /// Labels with mark glyphs: what the console game shows.
    pub fn output() -> Self {
        Self {
            text: CellText::WithMark,
            ascii: false,
        }
    }

    pub fn with_ascii(mut self, ascii: bool) -> Self {
        self.ascii = ascii;
        self
    }

    fn cell_text(&self, cell: &Cell) -> String {
        match self.text {
            CellText::Label => cell.label().to_string(),
            CellText::WithMark => cell.to_string(),
        }
    }

    /// The label matrix fed into the layout engine.
    pub fn matrix(&self, grid: &Grid) -> Vec<Vec<String>> {
        grid.rows()
            .map(|row| row.iter().map(|cell| self.cell_text(cell)).collect())
            .collect()
    }

    pub fn layout(&self, grid: &Grid) -> Result<WrappedTable, LayoutError> {
        wrap(&self.matrix(grid))
    }

    pub fn render(&self, grid: &Grid) -> Result<String, LayoutError> {
        let text = render(&self.layout(grid)?);
        Ok(if self.ascii { to_ascii(&text) } else { text })
    }

    pub fn render_lines(&self, grid: &Grid) -> Result<Vec<String>, LayoutError> {
        let lines = render_lines(&self.layout(grid)?);
        Ok(if self.ascii {
            lines.iter().map(|l| to_ascii(l)).collect()
        } else {
            lines
        })
    }
}
