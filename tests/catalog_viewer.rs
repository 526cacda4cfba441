//! Integration tests for loading a catalog file and preparing record details.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::path::PathBuf;

use prodview::app::{App, DetailView};
use prodview::config::Config;
use prodview::constants::formatting::{FALLBACK_CONTENT, HIGHLIGHT_OPEN};
use prodview::error::Error;
use prodview::markup;
use prodview::store::CatalogStore;
use tempfile::TempDir;

// Helper function to write a catalog file into a fresh directory
fn write_catalog(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("train.csv");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

const CATALOG: &str = "\
sample_id,catalog_content,image_link,price
33127,\"Item Name: La Victoria Green Taco Sauce Mild, 12 Ounce (Pack of 6)
Value: 72.0
Unit: Fl Oz
\",https://m.media-amazon.com/images/I/51mo8htwTHL.jpg,4.89
198967,,https://m.media-amazon.com/images/I/71YtriIHAAL.jpg,13.12
";

#[test]
fn test_multiline_record_formats_into_blocks() {
    let (_dir, path) = write_catalog(CATALOG);
    let store = CatalogStore::open(&path).unwrap();
    assert_eq!(store.source(), Some(path.as_path()));

    let detail = DetailView::build(store.get("33127").unwrap()).unwrap();
    let blocks: Vec<&str> = detail.formatted.split("\n\n").collect();
    assert_eq!(
        blocks,
        vec![
            "**Item Name:** La Victoria Green Taco Sauce Mild, 12 Ounce (Pack of 6)",
            // a key absorbs the word characters before it, across the line break
            "**Value:** 72.",
            "**0\nUnit:** Fl Oz",
        ]
    );

    // raw view highlights the keys themselves
    assert_eq!(detail.highlighted_raw.matches(HIGHLIGHT_OPEN).count(), 3);
    assert_eq!(detail.fields.len(), 4);
}

#[test]
fn test_empty_content_renders_fallback() {
    let (_dir, path) = write_catalog(CATALOG);
    let store = CatalogStore::open(&path).unwrap();

    let detail = DetailView::build(store.get("198967").unwrap()).unwrap();
    assert_eq!(detail.highlighted_raw, FALLBACK_CONTENT);
    assert_eq!(markup::to_plain(&detail.formatted), format!("\u{2022} {FALLBACK_CONTENT}"));
}

#[test]
fn test_missing_image_column_blocks_viewer() {
    let (_dir, path) = write_catalog("sample_id,catalog_content\n1,Unit: 2\n");

    match CatalogStore::open(&path) {
        Err(Error::MissingColumns { missing, .. }) => assert_eq!(missing, vec!["image_link"]),
        other => panic!("expected MissingColumns, got {other:?}"),
    }

    let app = App::new(Config::default().with_catalog_path(path.to_str().unwrap()));
    assert!(app.store.is_none());
    assert!(app.detail.is_none());
    assert!(app.load_error.as_ref().unwrap().contains("image_link"));
}

#[test]
fn test_parse_error_names_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("train.csv");
    std::fs::write(&path, b"sample_id,catalog_content,image_link\n1,\xff\xfe,x\n").unwrap();
    let err = CatalogStore::open(&path).unwrap_err();
    assert!(matches!(err, Error::Parse { file: Some(ref f), .. } if f == &path));
}
