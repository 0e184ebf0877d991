//! Shared types module - constants and small enums used across the workspace
//!
//! Everything here is plain data with no external dependencies, so the core,
//! the renderers and the prompt parsing can all agree on the same vocabulary.
//!
//! # Card Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_CARD_SIZE` | 5 | Side length when none is requested |
//! | `MIN_CARD_SIZE` | 1 | Smallest valid card |
//! | `FREE_LABEL` | `FREE` | Text shown in the free center cell |
//! | `MARKED_GLYPH` | `x` | Prefix for marked cells in console output |
//! | `UNMARKED_GLYPH` | `o` | Prefix for unmarked cells in console output |
//!
//! # Page Geometry
//!
//! PDF pages are US Letter (612 x 792 pt). Cards are placed by the text
//! origin of their first line:
//!
//! - one card per page at (20, 770)
//! - six cards per page at `(SIX_UP_X[i % 2], SIX_UP_Y[i % 3])`
//!
//! # Examples
//!
//! ```
//! use bingo_types::{PlayCommand, PrintMode};
//!
//! assert_eq!(PrintMode::from_str("six"), Some(PrintMode::Six));
//! assert_eq!(PrintMode::Six.cards_per_page(), 6);
//!
//! assert_eq!(PlayCommand::from_str("q"), Some(PlayCommand::Quit));
//! assert_eq!(PlayCommand::from_str("2 3"), Some(PlayCommand::Mark { x: 1, y: 2 }));
//! ```

/// Side length used when the caller does not pick one
pub const DEFAULT_CARD_SIZE: usize = 5;

/// Smallest valid side length
pub const MIN_CARD_SIZE: usize = 1;

/// Label rendered for the free center cell
pub const FREE_LABEL: &str = "FREE";

/// Mark indicator for marked cells
pub const MARKED_GLYPH: &str = "x";

/// Mark indicator for cells still open
pub const UNMARKED_GLYPH: &str = "o";

/// Letter page width in points
pub const PAGE_WIDTH_PT: f32 = 612.0;

/// Letter page height in points
pub const PAGE_HEIGHT_PT: f32 = 792.0;

/// Text origin of the single card on a one-up page
pub const ONE_UP_ORIGIN: (f32, f32) = (20.0, 770.0);

/// Column origins for six-up pages
pub const SIX_UP_X: [f32; 2] = [20.0, 320.0];

/// Row origins for six-up pages (top to bottom)
pub const SIX_UP_Y: [f32; 3] = [770.0, 510.0, 250.0];

/// Preferred font size for one-up pages
pub const ONE_UP_FONT_PT: f32 = 14.0;

/// Preferred font size for six-up pages
pub const SIX_UP_FONT_PT: f32 = 12.0;

/// Page layout used when exporting cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrintMode {
    /// One card per page
    One,
    /// Six cards per page in a 2x3 arrangement
    Six,
}

impl PrintMode {
    /// Parse mode from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use bingo_types::PrintMode;
    ///
    /// assert_eq!(PrintMode::from_str("ONE"), Some(PrintMode::One));
    /// assert_eq!(PrintMode::from_str("6"), Some(PrintMode::Six));
    /// assert_eq!(PrintMode::from_str("ten"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "one" | "1" => Some(PrintMode::One),
            "six" | "6" => Some(PrintMode::Six),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrintMode::One => "one",
            PrintMode::Six => "six",
        }
    }

    pub fn cards_per_page(&self) -> usize {
        match self {
            PrintMode::One => 1,
            PrintMode::Six => 6,
        }
    }
}

/// Commands accepted by the interactive console game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayCommand {
    /// Mark the cell at zero-based column `x`, row `y`
    Mark { x: usize, y: usize },
    /// Leave the game
    Quit,
}

impl PlayCommand {
    /// Parse a typed line.
    ///
    /// Coordinates are typed 1-based as `X Y` (comma or whitespace separated)
    /// and returned 0-based. `0` is never a valid coordinate.
    ///
    /// ```
    /// use bingo_types::PlayCommand;
    ///
    /// assert_eq!(PlayCommand::from_str("1,1"), Some(PlayCommand::Mark { x: 0, y: 0 }));
    /// assert_eq!(PlayCommand::from_str("quit"), Some(PlayCommand::Quit));
    /// assert_eq!(PlayCommand::from_str("0 1"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let trimmed = s.trim().to_lowercase();
        match trimmed.as_str() {
            "q" | "quit" | "exit" => return Some(PlayCommand::Quit),
            _ => {}
        }

        let mut parts = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty());
        let x: usize = parts.next()?.parse().ok()?;
        let y: usize = parts.next()?.parse().ok()?;
        if parts.next().is_some() || x == 0 || y == 0 {
            return None;
        }
        Some(PlayCommand::Mark { x: x - 1, y: y - 1 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_up_offsets_fill_six_distinct_slots() {
        let mut slots = Vec::new();
        for i in 0..6 {
            slots.push((SIX_UP_X[i % 2] as i32, SIX_UP_Y[i % 3] as i32));
        }
        slots.sort();
        slots.dedup();
        assert_eq!(slots.len(), 6);
    }

    #[test]
    fn print_mode_round_trips_names() {
        for mode in [PrintMode::One, PrintMode::Six] {
            assert_eq!(PrintMode::from_str(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn play_command_rejects_garbage() {
        assert_eq!(PlayCommand::from_str(""), None);
        assert_eq!(PlayCommand::from_str("a b"), None);
        assert_eq!(PlayCommand::from_str("1"), None);
        assert_eq!(PlayCommand::from_str("1 2 3"), None);
        assert_eq!(PlayCommand::from_str("-1 2"), None);
    }

    #[test]
    fn play_command_accepts_padding() {
        assert_eq!(
            PlayCommand::from_str("  3   5 \n"),
            Some(PlayCommand::Mark { x: 2, y: 4 })
        );
    }
}
