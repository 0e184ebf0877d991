//! ConsoleRenderer: flushes rendered cards to a terminal.
//!
//! Output is line-based (no raw mode) so the interactive prompts keep working
//! with ordinary buffered stdin. Commands are encoded into a byte buffer first
//! and written in one go.

use std::io::Write;

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

pub struct ConsoleRenderer<W: Write> {
    out: W,
    buf: Vec<u8>,
    clear: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(4 * 1024),
            clear: false,
        }
    }

    /// Clear the screen before every card.
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// Draw a rendered card followed by a status line.
    pub fn draw_card(&mut self, card: &str, status: &str) -> Result<()> {
        self.buf.clear();
        encode_card_into(card, status, self.clear, &mut self.buf)?;
        self.flush_buf()
    }

    /// Print a highlighted line, e.g. the win announcement.
    pub fn announce(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        encode_highlight_into(text, Color::Green, &mut self.buf)?;
        self.flush_buf()
    }

    /// Print a warning line, e.g. rejected input.
    pub fn warn(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        encode_highlight_into(text, Color::Yellow, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn message(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a card redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_card_into(card: &str, status: &str, clear: bool, out: &mut Vec<u8>) -> Result<()> {
    if clear {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
        out.queue(cursor::MoveTo(0, 0))?;
    }
    out.queue(Print(card))?;
    out.queue(Print("\n"))?;
    if !status.is_empty() {
        out.queue(SetAttribute(Attribute::Dim))?;
        out.queue(Print(status))?;
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(Print("\n"))?;
    }
    Ok(())
}

fn encode_highlight_into(text: &str, color: Color, out: &mut Vec<u8>) -> Result<()> {
    out.queue(SetForegroundColor(color))?;
    out.queue(SetAttribute(Attribute::Bold))?;
    out.queue(Print(text))?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(ResetColor)?;
    out.queue(Print("\n"))?;
    Ok(())
}
