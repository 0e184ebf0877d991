//! End-to-end: set store to assembled cards to PDF file

use bingo_cards::core::rng::seeded;
use bingo_cards::export::{card_blocks, export_document};
use bingo_cards::pdf::{PdfError, PdfSink};
use bingo_cards::session::{build_cards, CardRequest};
use bingo_cards::store::{FileSetStore, SetStore};
use bingo_cards::types::PrintMode;

fn office_store() -> (tempfile::TempDir, FileSetStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSetStore::new(dir.path().join("sets"));
    let lines: Vec<String> = (0..40).map(|i| format!("Meeting moment {}", i)).collect();
    store.save("office", &lines).unwrap();
    (dir, store)
}

fn request() -> CardRequest {
    CardRequest {
        set: "office".to_string(),
        size: 5,
        free_cell: true,
    }
}

#[test]
fn test_six_up_pages() {
    let (_dir, store) = office_store();
    let cards = build_cards(&store, &request(), 12, &mut seeded(2)).unwrap();
    let doc = export_document(&cards, PrintMode::Six).unwrap();
    assert_eq!(doc.page_count(), 2);

    let doc = export_document(&cards[..7], PrintMode::Six).unwrap();
    assert_eq!(doc.page_count(), 2);
}

#[test]
fn test_one_up_page_per_card() {
    let (_dir, store) = office_store();
    let cards = build_cards(&store, &request(), 3, &mut seeded(2)).unwrap();
    let doc = export_document(&cards, PrintMode::One).unwrap();
    assert_eq!(doc.page_count(), 3);
    assert!(doc.font_size(0).unwrap() > 0.0);
}

#[test]
fn test_blocks_are_ascii_tables() {
    let (_dir, store) = office_store();
    let cards = build_cards(&store, &request(), 1, &mut seeded(2)).unwrap();
    let blocks = card_blocks(&cards).unwrap();
    assert_eq!(blocks.len(), 1);
    assert!(blocks[0].iter().all(|line| line.is_ascii()));
    assert!(blocks[0][0].starts_with('+'));
    assert!(blocks[0].iter().any(|line| line.contains("FREE")));
}

#[test]
fn test_written_file_is_pdf() {
    let (dir, store) = office_store();
    let cards = build_cards(&store, &request(), 6, &mut seeded(4)).unwrap();
    let doc = export_document(&cards, PrintMode::Six).unwrap();

    let sink = PdfSink::new(dir.path().join("output"));
    let path = sink.write(&doc, "office-BingoCards-1.pdf").unwrap();
    assert!(path.starts_with(dir.path().join("output")));

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("/Courier"));
}

#[test]
fn test_empty_document_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let doc = export_document(&[], PrintMode::One).unwrap();
    let err = PdfSink::new(dir.path()).write(&doc, "empty.pdf").unwrap_err();
    assert!(matches!(err, PdfError::Empty));
    assert!(!dir.path().join("empty.pdf").exists());
}
