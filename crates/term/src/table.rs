//! Table renderer: draws a [`WrappedTable`] as a box-drawn grid of
//! monospaced lines.
//!
//! ```text
//! ┌─────┬─────┐
//! │a b  │ccc  │
//! │     │dd   │
//! ├─────┼─────┤
//! │...  │...  │
//! └─────┴─────┘
//! ```
//!
//! Every output line has the same width: `size * (column_width + 1) + 1`.

use crate::layout::WrappedTable;

pub const TOP_LEFT: char = '┌';
pub const TOP_RIGHT: char = '┐';
pub const BOTTOM_LEFT: char = '└';
pub const BOTTOM_RIGHT: char = '┘';
pub const TOP_JUNCTION: char = '┬';
pub const BOTTOM_JUNCTION: char = '┴';
pub const LEFT_JUNCTION: char = '├';
pub const RIGHT_JUNCTION: char = '┤';
pub const CROSS: char = '┼';
pub const HORIZONTAL: char = '─';
pub const VERTICAL: char = '│';

/// One horizontal border: `left`, then `size` runs of `width` dashes joined
/// by `junction`, then `right`.
fn border(left: char, junction: char, right: char, size: usize, width: usize) -> String {
    let mut line = String::with_capacity((size * (width + 1) + 1) * 3);
    line.push(left);
    for i in 0..size {
        if i > 0 {
            line.push(junction);
        }
        line.extend(std::iter::repeat(HORIZONTAL).take(width));
    }
    line.push(right);
    line
}

/// Render into individual lines, top border first.
pub fn render_lines(table: &WrappedTable) -> Vec<String> {
    let size = table.size();
    let width = table.column_width();
    let height = table.row_height();

    let top = border(TOP_LEFT, TOP_JUNCTION, TOP_RIGHT, size, width);
    let middle = border(LEFT_JUNCTION, CROSS, RIGHT_JUNCTION, size, width);
    let bottom = border(BOTTOM_LEFT, BOTTOM_JUNCTION, BOTTOM_RIGHT, size, width);

    let mut lines = Vec::with_capacity(size * (height + 1) + 1);
    lines.push(top);
    for y in 0..size {
        if y > 0 {
            lines.push(middle.clone());
        }
        for i in 0..height {
            let mut line = String::new();
            line.push(VERTICAL);
            for x in 0..size {
                line.push_str(&format!("{:<width$}", table.line(x, y, i), width = width));
                line.push(VERTICAL);
            }
            lines.push(line);
        }
    }
    lines.push(bottom);
    lines
}

/// Render the table as a single string, lines separated by `\n` with no
/// trailing newline.
pub fn render(table: &WrappedTable) -> String {
    render_lines(table).join("\n")
}

/// Replace box-drawing glyphs with `+`, `|` and `-` for sinks without
/// Unicode box characters. Widths are preserved.
pub fn to_ascii(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            TOP_LEFT | TOP_RIGHT | BOTTOM_LEFT | BOTTOM_RIGHT | TOP_JUNCTION | BOTTOM_JUNCTION
            | LEFT_JUNCTION | RIGHT_JUNCTION | CROSS => '+',
            VERTICAL => '|',
            HORIZONTAL => '-',
            other => other,
        })
        .collect()
}
