use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Grid};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub label: String,
    pub marked: bool,
    pub free: bool,
}

impl From<&Cell> for CellSnapshot {
    fn from(cell: &Cell) -> Self {
        Self {
            label: cell.label().to_string(),
            marked: cell.is_marked(),
            free: cell.is_free(),
        }
    }
}

/// Point-in-time view of a card, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub size: usize,
    pub marked_count: usize,
    pub complete: bool,
    pub rows: Vec<Vec<CellSnapshot>>,
}

impl From<&Grid> for CardSnapshot {
    fn from(grid: &Grid) -> Self {
        Self {
            size: grid.size(),
            marked_count: grid.marked_count(),
            complete: grid.is_complete(),
            rows: grid
                .rows()
                .map(|row| row.iter().map(CellSnapshot::from).collect())
                .collect(),
        }
    }
}

impl Grid {
    pub fn snapshot(&self) -> CardSnapshot {
        CardSnapshot::from(self)
    }
}
