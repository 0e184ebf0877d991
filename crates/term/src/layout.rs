//! Text layout engine: word-wraps a square matrix of labels into cells that
//! share one bounding box.
//!
//! Two passes over the whole matrix:
//!
//! 1. split every label on spaces and take the longest word as the column
//!    width budget;
//! 2. sweep each cell left to right once, merging a word with its right
//!    neighbour when the joined text stays strictly shorter than the budget.
//!    A merged segment is not merged again in the same sweep.
//!
//! The final column width is the longest segment, the row height the largest
//! segment count. Both are global so every cell renders in an identical box.
//! Lengths are counted in `char`s, which matches one terminal column for the
//! label text this tool deals with.

use thiserror::Error;

/// Malformed input to the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("cannot lay out an empty matrix")]
    EmptyMatrix,

    #[error("label matrix is not square")]
    NotSquare,
}

/// A word-wrapped label matrix plus its global metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedTable {
    size: usize,
    /// Line segments per cell, row-major (y * size + x)
    cells: Vec<Vec<String>>,
    column_width: usize,
    row_height: usize,
}

impl WrappedTable {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Width of every cell in characters (at least 1)
    pub fn column_width(&self) -> usize {
        self.column_width
    }

    /// Height of every cell in lines (at least 1)
    pub fn row_height(&self) -> usize {
        self.row_height
    }

    /// Segments of the cell at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not below [`size`](Self::size).
    pub fn cell(&self, x: usize, y: usize) -> &[String] {
        assert!(x < self.size && y < self.size, "cell ({x}, {y}) out of range");
        &self.cells[y * self.size + x]
    }

    /// Line `line` of a cell, empty when the cell has fewer segments.
    pub fn line(&self, x: usize, y: usize, line: usize) -> &str {
        self.cell(x, y).get(line).map(String::as_str).unwrap_or("")
    }

    /// Each cell's segments joined with newlines, as a matrix.
    pub fn to_matrix(&self) -> Vec<Vec<String>> {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|segments| segments.join("\n")).collect())
            .collect()
    }
}

/// Display width of a piece of text.
#[inline]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Split a label into words, ignoring runs of spaces.
pub fn split_words(label: &str) -> Vec<&str> {
    label.split(' ').filter(|w| !w.is_empty()).collect()
}

/// Single greedy sweep: join word `k` and `k + 1` when the result is strictly
/// shorter than `column_width`, then continue after the pair.
pub fn pack_words(words: &[&str], column_width: usize) -> Vec<String> {
    let mut segments = Vec::with_capacity(words.len());
    let mut k = 0;
    while k < words.len() {
        if let Some(next) = words.get(k + 1) {
            let joined = text_width(words[k]) + 1 + text_width(next);
            if joined < column_width {
                segments.push(format!("{} {}", words[k], next));
                k += 2;
                continue;
            }
        }
        segments.push(words[k].to_string());
        k += 1;
    }
    segments
}

/// Lay out a square matrix of labels, rows top to bottom.
pub fn wrap<S: AsRef<str>>(matrix: &[Vec<S>]) -> Result<WrappedTable, LayoutError> {
    let size = matrix.len();
    if size == 0 {
        return Err(LayoutError::EmptyMatrix);
    }
    if matrix.iter().any(|row| row.len() != size) {
        return Err(LayoutError::NotSquare);
    }

    let words: Vec<Vec<&str>> = matrix
        .iter()
        .flat_map(|row| row.iter().map(|label| split_words(label.as_ref())))
        .collect();

    // Pass 1: budget is the longest single word anywhere on the card.
    let budget = words
        .iter()
        .flat_map(|cell| cell.iter().map(|w| text_width(w)))
        .max()
        .unwrap_or(0);

    let cells: Vec<Vec<String>> = words.iter().map(|cell| pack_words(cell, budget)).collect();

    // Pass 2: metrics over the packed segments.
    let column_width = cells
        .iter()
        .flat_map(|cell| cell.iter().map(|s| text_width(s)))
        .max()
        .unwrap_or(0)
        .max(1);
    let row_height = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);

    Ok(WrappedTable {
        size,
        cells,
        column_width,
        row_height,
    })
}
