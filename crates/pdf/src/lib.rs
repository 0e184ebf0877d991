//! PDF render sink.
//!
//! The sink knows nothing about bingo cards: it receives blocks of already
//! rendered monospaced lines, places each block at a text origin on a US
//! Letter page and writes the document. Text is set in the base-14 Courier
//! font, so no font file has to be embedded and every character advances by
//! the same width.
//!
//! Multi-card pages use fixed slots (see [`PageLayout`]). The font size is
//! picked per page so the widest and tallest block still fits its slot.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use thiserror::Error;
use tracing::info;

use bingo_types::{
    PrintMode, ONE_UP_FONT_PT, ONE_UP_ORIGIN, PAGE_HEIGHT_PT, PAGE_WIDTH_PT, SIX_UP_FONT_PT,
    SIX_UP_X, SIX_UP_Y,
};

/// Advance width of a Courier glyph as a fraction of the font size.
pub const COURIER_ADVANCE: f32 = 0.6;

/// Font resource name used on every page.
const FONT_NAME: Name<'static> = Name(b"F1");

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("nothing to print")]
    Empty,

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Pre-rendered monospaced lines placed at a text origin (baseline of the
/// first line, in points from the bottom-left corner).
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub origin: (f32, f32),
}

impl TextBlock {
    pub fn new(lines: Vec<String>, origin: (f32, f32)) -> Self {
        Self { lines, origin }
    }

    /// Widest line in characters
    pub fn columns(&self) -> usize {
        self.lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn rows(&self) -> usize {
        self.lines.len()
    }
}

/// Fixed slot arrangement of a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    slots: Vec<(f32, f32)>,
    slot_width: f32,
    slot_height: f32,
    preferred_font: f32,
    /// Line advance as a multiple of the font size
    leading_ratio: f32,
}

impl PageLayout {
    pub fn for_mode(mode: PrintMode) -> Self {
        match mode {
            PrintMode::One => Self {
                slots: vec![ONE_UP_ORIGIN],
                slot_width: PAGE_WIDTH_PT - 2.0 * ONE_UP_ORIGIN.0,
                slot_height: ONE_UP_ORIGIN.1 - ONE_UP_ORIGIN.0,
                preferred_font: ONE_UP_FONT_PT,
                leading_ratio: 1.0,
            },
            PrintMode::Six => Self {
                slots: (0..6).map(|i| (SIX_UP_X[i % 2], SIX_UP_Y[i % 3])).collect(),
                slot_width: SIX_UP_X[1] - SIX_UP_X[0] - SIX_UP_X[0],
                slot_height: SIX_UP_Y[0] - SIX_UP_Y[1] - 10.0,
                preferred_font: SIX_UP_FONT_PT,
                leading_ratio: 14.0 / 12.0,
            },
        }
    }

    pub fn slots(&self) -> &[(f32, f32)] {
        &self.slots
    }

    /// Largest font size up to the preferred one at which a block of
    /// `columns x rows` characters fits a slot.
    pub fn fit_font_size(&self, columns: usize, rows: usize) -> f32 {
        let mut size = self.preferred_font;
        if columns > 0 {
            size = size.min(self.slot_width / (columns as f32 * COURIER_ADVANCE));
        }
        if rows > 0 {
            size = size.min(self.slot_height / (rows as f32 * self.leading_ratio));
        }
        size
    }

    pub fn leading(&self, font_size: f32) -> f32 {
        font_size * self.leading_ratio
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Page {
    blocks: Vec<TextBlock>,
    font_size: f32,
    leading: f32,
}

/// In-memory document of positioned text blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PdfDocument {
    pages: Vec<Page>,
}

impl PdfDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paginate blocks of lines into the slots of `mode`, one page per
    /// full set of slots.
    pub fn paginate(blocks: &[Vec<String>], mode: PrintMode) -> Self {
        let layout = PageLayout::for_mode(mode);
        let mut doc = Self::new();
        for chunk in blocks.chunks(layout.slots().len()) {
            let placed: Vec<TextBlock> = chunk
                .iter()
                .zip(layout.slots())
                .map(|(lines, &origin)| TextBlock::new(lines.clone(), origin))
                .collect();
            let columns = placed.iter().map(TextBlock::columns).max().unwrap_or(0);
            let rows = placed.iter().map(TextBlock::rows).max().unwrap_or(0);
            let font_size = layout.fit_font_size(columns, rows);
            doc.add_page(placed, font_size, layout.leading(font_size));
        }
        doc
    }

    pub fn add_page(&mut self, blocks: Vec<TextBlock>, font_size: f32, leading: f32) {
        self.pages.push(Page {
            blocks,
            font_size,
            leading,
        });
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Font size used on a page
    pub fn font_size(&self, page: usize) -> Option<f32> {
        self.pages.get(page).map(|p| p.font_size)
    }

    /// Serialize to PDF bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, PdfError> {
        if self.pages.is_empty() {
            return Err(PdfError::Empty);
        }

        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let font_id = Ref::new(3);
        let page_ids: Vec<Ref> = (0..self.pages.len())
            .map(|i| Ref::new(4 + 2 * i as i32))
            .collect();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);
        pdf.type1_font(font_id)
            .base_font(Name(b"Courier"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        for (page, &page_id) in self.pages.iter().zip(&page_ids) {
            let content_id = Ref::new(page_id.get() + 1);

            let mut writer = pdf.page(page_id);
            writer.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH_PT, PAGE_HEIGHT_PT));
            writer.parent(page_tree_id);
            writer.contents(content_id);
            writer.resources().fonts().pair(FONT_NAME, font_id);
            writer.finish();

            let mut content = Content::new();
            for block in &page.blocks {
                content.begin_text();
                content.set_font(FONT_NAME, page.font_size);
                content.next_line(block.origin.0, block.origin.1);
                for line in &block.lines {
                    content.show(Str(&encode_line(line)));
                    content.next_line(0.0, -page.leading);
                }
                content.end_text();
            }
            pdf.stream(content_id, &content.finish());
        }

        Ok(pdf.finish())
    }
}

/// Map text to single-byte WinAnsi codes, `?` for anything outside Latin-1.
/// One byte per char keeps monospaced columns aligned.
pub fn encode_line(line: &str) -> Vec<u8> {
    line.chars()
        .map(|c| match c as u32 {
            0x20..=0x7e | 0xa0..=0xff => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

/// File name used when the caller gives no explicit path.
pub fn default_file_name(mode: PrintMode, set_name: &str, millis: u128) -> String {
    match mode {
        PrintMode::One => format!("BingoCard-{}.pdf", millis),
        PrintMode::Six => format!("{}-BingoCards-{}.pdf", set_name, millis),
    }
}

/// Writes documents into an output directory.
#[derive(Debug, Clone)]
pub struct PdfSink {
    output_dir: PathBuf,
}

impl PdfSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write `doc` to `file_name` inside the output directory.
    pub fn write(&self, doc: &PdfDocument, file_name: &str) -> Result<PathBuf, PdfError> {
        let path = self.output_dir.join(file_name);
        self.write_to(doc, &path)?;
        Ok(path)
    }

    /// Write `doc` to an explicit path, creating parent directories.
    pub fn write_to(&self, doc: &PdfDocument, path: &Path) -> Result<(), PdfError> {
        let bytes = doc.to_bytes()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PdfError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, &bytes).map_err(|source| PdfError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), pages = doc.page_count(), "wrote pdf");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(width: usize, height: usize) -> Vec<String> {
        (0..height).map(|_| "+".repeat(width)).collect()
    }

    #[test]
    fn small_cards_keep_the_preferred_font() {
        let one = PageLayout::for_mode(PrintMode::One);
        assert_eq!(one.fit_font_size(20, 10), ONE_UP_FONT_PT);

        let six = PageLayout::for_mode(PrintMode::Six);
        assert_eq!(six.fit_font_size(20, 10), SIX_UP_FONT_PT);
    }

    #[test]
    fn wide_cards_shrink_to_fit_the_slot() {
        let six = PageLayout::for_mode(PrintMode::Six);
        let size = six.fit_font_size(80, 10);
        assert!(size < SIX_UP_FONT_PT);
        assert!(80.0 * COURIER_ADVANCE * size <= 280.0 + 0.01);
    }

    #[test]
    fn tall_cards_shrink_to_fit_the_slot() {
        let one = PageLayout::for_mode(PrintMode::One);
        let size = one.fit_font_size(10, 100);
        assert!(size * 100.0 <= 750.0 + 0.01);
    }

    #[test]
    fn paginate_fills_six_slots_per_page() {
        let blocks: Vec<Vec<String>> = (0..7).map(|_| block(7, 7)).collect();
        let doc = PdfDocument::paginate(&blocks, PrintMode::Six);
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.pages[0].blocks.len(), 6);
        assert_eq!(doc.pages[1].blocks.len(), 1);
        assert_eq!(doc.pages[0].blocks[1].origin, (320.0, 510.0));
    }

    #[test]
    fn bytes_form_a_pdf() {
        let doc = PdfDocument::paginate(&[block(5, 3), block(5, 3)], PrintMode::One);
        let bytes = doc.to_bytes().unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.starts_with("%PDF-"));
        assert!(text.contains("/Courier"));
        assert!(text.contains("/Count 2"));
        assert!(text.contains("Tj"));
    }

    #[test]
    fn empty_document_is_an_error() {
        assert!(matches!(PdfDocument::new().to_bytes(), Err(PdfError::Empty)));
    }

    #[test]
    fn encode_line_keeps_one_byte_per_char() {
        assert_eq!(encode_line("|a|"), b"|a|".to_vec());
        assert_eq!(encode_line("café"), vec![b'c', b'a', b'f', 0xe9]);
        assert_eq!(encode_line("│日│"), b"???".to_vec());
    }

    #[test]
    fn default_names_follow_mode() {
        assert_eq!(default_file_name(PrintMode::One, "x", 5), "BingoCard-5.pdf");
        assert_eq!(default_file_name(PrintMode::Six, "office", 5), "office-BingoCards-5.pdf");
    }

    #[test]
    fn sink_writes_into_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let sink = PdfSink::new(dir.path().join("out"));
        let doc = PdfDocument::paginate(&[block(3, 3)], PrintMode::One);

        let path = sink.write(&doc, "card.pdf").unwrap();
        assert!(path.ends_with("out/card.pdf"));
        assert!(fs::read(&path).unwrap().starts_with(b"%PDF-"));
    }
}
