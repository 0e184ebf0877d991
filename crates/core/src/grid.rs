//! Grid module - the square field of labelled cells
//!
//! A card is an NxN grid where each cell carries a label and a mark flag.
//! Uses a flat vector in row-major order (`y * size + x`).
//! Coordinates: (x, y) where x is the column (left to right) and y the row
//! (top to bottom), both in `0..size`.
//!
//! The size is fixed at creation. The only mutations are relabelling a cell,
//! marking it, and swapping the center for a free cell.

use std::fmt;

use crate::error::{GridError, Result};
use crate::types::{FREE_LABEL, MARKED_GLYPH, MIN_CARD_SIZE, UNMARKED_GLYPH};

/// A single cell on the card.
///
/// `Free` has no label of its own and reports marked unconditionally, so a
/// free cell can never be unmarked or relabelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Normal { label: String, marked: bool },
    Free,
}

impl Cell {
    /// Create an unmarked cell with the given label
    pub fn new(label: impl Into<String>) -> Self {
        Cell::Normal {
            label: label.into(),
            marked: false,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Cell::Normal { label, .. } => label,
            Cell::Free => FREE_LABEL,
        }
    }

    pub fn is_marked(&self) -> bool {
        match self {
            Cell::Normal { marked, .. } => *marked,
            Cell::Free => true,
        }
    }

    pub fn is_free(&self) -> bool {
        matches!(self, Cell::Free)
    }

    /// Mark the cell. No-op for free cells.
    pub fn mark(&mut self) {
        if let Cell::Normal { marked, .. } = self {
            *marked = true;
        }
    }

    fn relabel(&mut self, text: String) {
        if let Cell::Normal { label, .. } = self {
            *label = text;
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::new(String::new())
    }
}

/// Console form of a cell: mark glyph then label, or the fixed free text.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Normal { label, marked } => {
                let glyph = if *marked { MARKED_GLYPH } else { UNMARKED_GLYPH };
                write!(f, "{} {}", glyph, label)
            }
            Cell::Free => f.write_str(FREE_LABEL),
        }
    }
}

/// The bingo card grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (y * size + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a `size x size` grid of empty, unmarked cells
    pub fn new(size: usize) -> Result<Self> {
        let Some(cell_count) = size.checked_mul(size).filter(|_| size >= MIN_CARD_SIZE) else {
            return Err(GridError::InvalidSize(size));
        };
        Ok(Self {
            size,
            cells: vec![Cell::default(); cell_count],
        })
    }

    /// Build a grid from a square matrix of labels, rows top to bottom
    pub fn from_labels<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self> {
        let size = rows.len();
        if size < MIN_CARD_SIZE {
            return Err(GridError::InvalidSize(size));
        }
        if rows.iter().any(|row| row.len() != size) {
            return Err(GridError::NotSquare);
        }

        let cells = rows
            .iter()
            .flat_map(|row| row.iter().map(|label| Cell::new(label.as_ref())))
            .collect();
        Ok(Self { size, cells })
    }

    /// Assemble from pre-built cells. Caller guarantees `cells.len() == size * size`.
    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x >= self.size || y >= self.size {
            return Err(GridError::IndexOutOfRange {
                x,
                y,
                size: self.size,
            });
        }
        Ok(y * self.size + x)
    }

    /// Side length of the card
    pub fn size(&self) -> usize {
        self.size
    }

    /// Center coordinate, only defined for odd sizes
    pub fn center(&self) -> Option<(usize, usize)> {
        if self.size % 2 == 1 {
            Some((self.size / 2, self.size / 2))
        } else {
            None
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Result<&Cell> {
        let idx = self.index(x, y)?;
        Ok(&self.cells[idx])
    }

    /// Replace the label of a cell, keeping its marked and free state
    pub fn set_cell(&mut self, x: usize, y: usize, label: impl Into<String>) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx].relabel(label.into());
        Ok(())
    }

    /// Replace the center cell with a free cell.
    ///
    /// Returns `false` and leaves the grid untouched for even sizes, which
    /// have no true center.
    pub fn apply_free_cell(&mut self) -> bool {
        match self.center() {
            Some((x, y)) => {
                let idx = y * self.size + x;
                self.cells[idx] = Cell::Free;
                true
            }
            None => false,
        }
    }

    /// Mark a cell. Marking a free or already marked cell changes nothing.
    pub fn mark_cell(&mut self, x: usize, y: usize) -> Result<()> {
        let idx = self.index(x, y)?;
        self.cells[idx].mark();
        Ok(())
    }

    pub fn is_marked(&self, x: usize, y: usize) -> Result<bool> {
        Ok(self.get(x, y)?.is_marked())
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_marked()).count()
    }

    /// Check for a bingo: any full row, any full column, or either main diagonal.
    pub fn is_complete(&self) -> bool {
        let n = self.size;
        let marked = |x: usize, y: usize| self.cells[y * n + x].is_marked();

        (0..n).any(|y| (0..n).all(|x| marked(x, y)))
            || (0..n).any(|x| (0..n).all(|y| marked(x, y)))
            || (0..n).all(|i| marked(i, i))
            || (0..n).all(|i| marked(n - 1 - i, i))
    }

    /// Rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// Short status summary of the card.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BingoCard\nSize: {}", self.size)?;
        if self.is_complete() {
            f.write_str("\nFinished")
        } else {
            write!(f, "\nNot finished, {} marked off", self.marked_count())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled(size: usize) -> Grid {
        let rows: Vec<Vec<String>> = (0..size)
            .map(|y| (0..size).map(|x| format!("L{}{}", x, y)).collect())
            .collect();
        Grid::from_labels(&rows).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_size() {
        assert_eq!(Grid::new(0), Err(GridError::InvalidSize(0)));
        assert_eq!(Grid::new(usize::MAX), Err(GridError::InvalidSize(usize::MAX)));
    }

    #[test]
    fn test_new_grid_is_empty_and_unmarked() {
        let grid = Grid::new(4).unwrap();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.cells().len(), 16);
        assert_eq!(grid.marked_count(), 0);
        assert!(grid.cells().iter().all(|c| c.label().is_empty()));
    }

    #[test]
    fn test_from_labels_rejects_ragged_rows() {
        let rows = vec![vec!["a", "b"], vec!["c"]];
        assert_eq!(Grid::from_labels(&rows), Err(GridError::NotSquare));

        let empty: Vec<Vec<&str>> = Vec::new();
        assert_eq!(Grid::from_labels(&empty), Err(GridError::InvalidSize(0)));
    }

    #[test]
    fn test_coordinates_are_column_then_row() {
        let grid = labelled(3);
        assert_eq!(grid.get(2, 0).unwrap().label(), "L20");
        assert_eq!(grid.get(0, 2).unwrap().label(), "L02");
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = Grid::new(3).unwrap();
        let err = GridError::IndexOutOfRange { x: 3, y: 0, size: 3 };
        assert_eq!(grid.mark_cell(3, 0), Err(err.clone()));
        assert_eq!(grid.is_marked(3, 0), Err(err));
        assert!(grid.set_cell(0, 7, "x").is_err());
    }

    #[test]
    fn test_free_cell_only_for_odd_sizes() {
        let mut odd = Grid::new(5).unwrap();
        assert!(odd.apply_free_cell());
        assert!(odd.get(2, 2).unwrap().is_free());
        assert_eq!(odd.marked_count(), 1);

        let mut even = Grid::new(4).unwrap();
        assert!(!even.apply_free_cell());
        assert!(even.cells().iter().all(|c| !c.is_free()));
    }

    #[test]
    fn test_free_cell_ignores_relabel_and_stays_marked() {
        let mut grid = Grid::new(3).unwrap();
        grid.apply_free_cell();
        grid.set_cell(1, 1, "Something").unwrap();
        grid.mark_cell(1, 1).unwrap();

        let center = grid.get(1, 1).unwrap();
        assert!(center.is_free());
        assert!(center.is_marked());
        assert_eq!(center.label(), FREE_LABEL);
    }

    #[test]
    fn test_set_cell_keeps_mark() {
        let mut grid = labelled(2);
        grid.mark_cell(1, 1).unwrap();
        grid.set_cell(1, 1, "renamed").unwrap();
        assert!(grid.is_marked(1, 1).unwrap());
        assert_eq!(grid.get(1, 1).unwrap().label(), "renamed");
    }

    #[test]
    fn test_single_cell_grid() {
        let mut grid = Grid::new(1).unwrap();
        assert!(!grid.is_complete());
        grid.mark_cell(0, 0).unwrap();
        assert!(grid.is_complete());
    }

    #[test]
    fn test_complete_row_column_and_diagonals() {
        let n = 4;

        let mut row = labelled(n);
        (0..n).for_each(|x| row.mark_cell(x, 2).unwrap());
        assert!(row.is_complete());

        let mut col = labelled(n);
        (0..n).for_each(|y| col.mark_cell(1, y).unwrap());
        assert!(col.is_complete());

        let mut diag_a = labelled(n);
        (0..n).for_each(|i| diag_a.mark_cell(i, i).unwrap());
        assert!(diag_a.is_complete());

        let mut diag_b = labelled(n);
        (0..n).for_each(|i| diag_b.mark_cell(n - 1 - i, i).unwrap());
        assert!(diag_b.is_complete());
    }

    #[test]
    fn test_incomplete_lines_do_not_win() {
        let mut grid = labelled(3);
        grid.mark_cell(0, 0).unwrap();
        grid.mark_cell(1, 0).unwrap();
        grid.mark_cell(0, 1).unwrap();
        grid.mark_cell(2, 1).unwrap();
        grid.mark_cell(1, 2).unwrap();
        assert!(!grid.is_complete());
        assert_eq!(grid.marked_count(), 5);
    }

    #[test]
    fn test_display_summary() {
        let mut grid = labelled(2);
        grid.mark_cell(0, 0).unwrap();
        assert_eq!(grid.to_string(), "BingoCard\nSize: 2\nNot finished, 1 marked off");

        grid.mark_cell(1, 0).unwrap();
        assert_eq!(grid.to_string(), "BingoCard\nSize: 2\nFinished");
    }

    #[test]
    fn test_cell_display_uses_glyphs() {
        let mut cell = Cell::new("Coffee break");
        assert_eq!(cell.to_string(), "o Coffee break");
        cell.mark();
        assert_eq!(cell.to_string(), "x Coffee break");
        assert_eq!(Cell::Free.to_string(), "FREE");
    }
}
