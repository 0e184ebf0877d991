//! Grid tests - marking, free cell and win detection

use bingo_cards::core::{Cell, Grid, GridError};
use bingo_cards::types::FREE_LABEL;

fn labelled(size: usize) -> Grid {
    let rows: Vec<Vec<String>> = (0..size)
        .map(|y| (0..size).map(|x| format!("{}-{}", x, y)).collect())
        .collect();
    Grid::from_labels(&rows).unwrap()
}

#[test]
fn test_grid_new_is_unmarked() {
    for size in 1..=6 {
        let grid = Grid::new(size).unwrap();
        assert_eq!(grid.size(), size);
        assert_eq!(grid.cells().len(), size * size);
        assert_eq!(grid.marked_count(), 0);
        assert!(!grid.is_complete(), "empty {0}x{0} grid must not win", size);
    }
}

#[test]
fn test_grid_zero_size_rejected() {
    assert_eq!(Grid::new(0).unwrap_err(), GridError::InvalidSize(0));
}

#[test]
fn test_grid_coordinates_are_column_then_row() {
    let grid = labelled(3);
    assert_eq!(grid.get(2, 0).unwrap().label(), "2-0");
    assert_eq!(grid.get(0, 2).unwrap().label(), "0-2");

    let rows: Vec<&[Cell]> = grid.rows().collect();
    assert_eq!(rows[1][2].label(), "2-1");
}

#[test]
fn test_grid_out_of_range() {
    let mut grid = labelled(3);
    assert!(matches!(
        grid.get(3, 0),
        Err(GridError::IndexOutOfRange { x: 3, y: 0, size: 3 })
    ));
    assert!(grid.mark_cell(0, 3).is_err());
    assert!(grid.set_cell(5, 5, "nope").is_err());
    assert_eq!(grid.marked_count(), 0);
}

#[test]
fn test_grid_each_row_wins() {
    for y in 0..4 {
        let mut grid = labelled(4);
        for x in 0..4 {
            assert!(!grid.is_complete());
            grid.mark_cell(x, y).unwrap();
        }
        assert!(grid.is_complete(), "row {} should win", y);
    }
}

#[test]
fn test_grid_each_column_wins() {
    for x in 0..4 {
        let mut grid = labelled(4);
        for y in 0..4 {
            grid.mark_cell(x, y).unwrap();
        }
        assert!(grid.is_complete(), "column {} should win", x);
    }
}

#[test]
fn test_grid_both_diagonals_win() {
    let mut main = labelled(5);
    let mut anti = labelled(5);
    for i in 0..5 {
        main.mark_cell(i, i).unwrap();
        anti.mark_cell(4 - i, i).unwrap();
    }
    assert!(main.is_complete());
    assert!(anti.is_complete());
}

#[test]
fn test_grid_scattered_marks_do_not_win() {
    let mut grid = labelled(3);
    // One short of every line.
    for (x, y) in [(0, 0), (1, 0), (0, 1), (2, 1), (1, 2)] {
        grid.mark_cell(x, y).unwrap();
    }
    assert_eq!(grid.marked_count(), 5);
    assert!(!grid.is_complete());
}

#[test]
fn test_grid_free_cell_counts_as_marked() {
    let mut grid = labelled(5);
    assert!(grid.apply_free_cell());

    let center = grid.get(2, 2).unwrap();
    assert!(center.is_free());
    assert!(center.is_marked());
    assert_eq!(center.label(), FREE_LABEL);

    for x in [0, 1, 3, 4] {
        grid.mark_cell(x, 2).unwrap();
    }
    assert!(grid.is_complete());
}

#[test]
fn test_grid_free_cell_ignores_relabel() {
    let mut grid = labelled(3);
    grid.apply_free_cell();
    grid.set_cell(1, 1, "changed").unwrap();
    assert!(grid.get(1, 1).unwrap().is_free());
}

#[test]
fn test_grid_even_size_has_no_free_cell() {
    let mut grid = labelled(4);
    assert!(!grid.apply_free_cell());
    assert!(grid.cells().iter().all(|c| !c.is_free()));
}

#[test]
fn test_grid_display_summary() {
    let mut grid = labelled(2);
    assert_eq!(grid.to_string(), "BingoCard\nSize: 2\nNot finished, 0 marked off");
    grid.mark_cell(0, 0).unwrap();
    grid.mark_cell(1, 0).unwrap();
    assert_eq!(grid.to_string(), "BingoCard\nSize: 2\nFinished");
}
