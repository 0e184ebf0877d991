//! PDF export of assembled cards.
//!
//! Cards are rendered with the print view (labels only), converted to ASCII
//! borders for the base-14 Courier font and handed to the PDF sink as blocks.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::Grid;
use crate::pdf::{default_file_name, PdfDocument};
use crate::term::{CardView, LayoutError};
use crate::types::PrintMode;

/// Rendered ASCII lines of every card, in order.
pub fn card_blocks(cards: &[Grid]) -> Result<Vec<Vec<String>>, LayoutError> {
    let view = CardView::print().with_ascii(true);
    cards.iter().map(|card| view.render_lines(card)).collect()
}

/// Lay the cards out on pages for `mode`.
pub fn export_document(cards: &[Grid], mode: PrintMode) -> Result<PdfDocument, LayoutError> {
    Ok(PdfDocument::paginate(&card_blocks(cards)?, mode))
}

/// Timestamped default file name for an export.
pub fn timestamped_file_name(mode: PrintMode, set_name: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    default_file_name(mode, set_name, millis)
}
