//! Card assembly - populate a grid from a label pool
//!
//! Labels are taken from a single shuffle of the pool, left to right and top
//! to bottom. When a free cell is requested (odd sizes only) the center is
//! skipped and becomes the free cell, so one fewer label is needed.

use rand::Rng;
use tracing::debug;

use crate::error::CardError;
use crate::grid::{Cell, Grid};
use crate::rng::LabelDeck;
use crate::types::MIN_CARD_SIZE;

/// Number of distinct labels a card of this size needs.
///
/// The free cell is ignored for even sizes. Saturates for sizes whose cell
/// count does not fit in `usize`.
pub fn required_labels(size: usize, add_free_cell: bool) -> usize {
    let free = add_free_cell && size % 2 == 1;
    size.saturating_mul(size) - usize::from(free)
}

/// Build a card from `pool`.
///
/// Duplicate pool entries count once. Fails with
/// [`CardError::InsufficientPool`] when the pool has fewer distinct entries
/// than [`required_labels`].
pub fn assemble<R: Rng + ?Sized>(
    pool: &[String],
    size: usize,
    add_free_cell: bool,
    rng: &mut R,
) -> Result<Grid, CardError> {
    let Some(cell_count) = size.checked_mul(size).filter(|_| size >= MIN_CARD_SIZE) else {
        return Err(CardError::InvalidSize(size));
    };

    let add_free_cell = add_free_cell && size % 2 == 1;
    let required = required_labels(size, add_free_cell);

    let mut deck = LabelDeck::shuffled(pool, rng);
    if deck.remaining() < required {
        debug!(
            size,
            required,
            available = deck.remaining(),
            "pool too small for card"
        );
        return Err(CardError::InsufficientPool {
            required,
            available: deck.remaining(),
        });
    }

    let center = size / 2;
    let mut cells = Vec::with_capacity(cell_count);
    for y in 0..size {
        for x in 0..size {
            if add_free_cell && x == center && y == center {
                cells.push(Cell::Free);
                continue;
            }
            match deck.draw() {
                Some(label) => cells.push(Cell::new(label)),
                None => {
                    return Err(CardError::InsufficientPool {
                        required,
                        available: cells.len(),
                    })
                }
            }
        }
    }

    debug!(size, free = add_free_cell, "assembled card");
    Ok(Grid::from_cells(size, cells))
}
