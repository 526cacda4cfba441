//! Catalog record store.
//!
//! Loads product records from a CSV file, checks that the required columns
//! are present and provides lookup by sample identifier.

use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::catalog::{CONTENT_COLUMN, ID_COLUMN, IMAGE_COLUMN, REQUIRED_COLUMNS};
use crate::error::{Error, Result};

/// A single catalog row.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// Unique sample identifier.
    pub id: String,
    /// Image URL or local path.
    pub image_ref: String,
    /// Raw catalog content, `None` when the cell is empty.
    pub content: Option<String>,
    /// Every column of the row, in header order.
    pub fields: Vec<(String, String)>,
}

/// Column positions of the required fields.
struct ColumnIndex {
    id: usize,
    image: usize,
    content: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &[String]) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|&name| position(name).is_none())
            .map(str::to_string)
            .collect();

        match (position(ID_COLUMN), position(IMAGE_COLUMN), position(CONTENT_COLUMN)) {
            (Some(id), Some(image), Some(content)) => Ok(Self { id, image, content }),
            _ => Err(Error::missing_columns(&REQUIRED_COLUMNS, missing)),
        }
    }
}

/// In-memory catalog loaded from CSV.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    headers: Vec<String>,
    records: Vec<Record>,
    ids: Vec<String>,
    by_id: HashMap<String, usize>,
    source: Option<PathBuf>,
}

impl CatalogStore {
    /// Load a catalog from a CSV file.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            let cwd = std::env::current_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "<unknown>".to_string());
            let absolute = std::path::absolute(path)
                .map_or_else(|_| path.display().to_string(), |p| p.display().to_string());
            return Err(Error::config(
                format!(
                    "The file was not found at the specified path: '{}' (working directory: {cwd}, absolute path: {absolute})",
                    path.display()
                ),
                "Make sure the CSV file exists, or set CATALOG_CSV / pass the path as an argument",
            ));
        }

        let file = fs_err::File::open(path)?;
        let mut store = Self::from_reader(file).map_err(|e| match e {
            Error::Parse { message, .. } => Error::parse(message, path.to_path_buf()),
            other => other,
        })?;
        store.source = Some(path.to_path_buf());

        tracing::info!(
            "Loaded {} records ({} unique ids) from {}",
            store.records.len(),
            store.ids.len(),
            path.display()
        );
        Ok(store)
    }

    /// Load a catalog from any CSV reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| Error::parse(e.to_string(), None))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let columns = ColumnIndex::from_headers(&headers)?;

        let mut store = Self {
            headers,
            ..Self::default()
        };

        for row in csv_reader.records() {
            let row = row.map_err(|e| Error::parse(e.to_string(), None))?;
            let cell = |idx: usize| row.get(idx).unwrap_or_default().to_string();

            let content = cell(columns.content);
            let record = Record {
                id: cell(columns.id),
                image_ref: cell(columns.image),
                content: (!content.is_empty()).then_some(content),
                fields: store
                    .headers
                    .iter()
                    .enumerate()
                    .map(|(i, h)| (h.clone(), cell(i)))
                    .collect(),
            };
            store.push(record);
        }

        Ok(store)
    }

    fn push(&mut self, record: Record) {
        let idx = self.records.len();
        if !self.by_id.contains_key(&record.id) {
            self.by_id.insert(record.id.clone(), idx);
            self.ids.push(record.id.clone());
        }
        self.records.push(record);
    }

    /// Unique identifiers in order of first appearance.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// First record with the given identifier.
    pub fn get(&self, id: &str) -> Option<&Record> {
        self.by_id.get(id).and_then(|&idx| self.records.get(idx))
    }

    /// Column names of the source file.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// File the catalog was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    const CSV: &str = "\
sample_id,catalog_content,image_link,price
101,\"Item Name: Mug, Value: 4\",https://example.com/101.jpg,9.99
102,,https://example.com/102.jpg,1.50
101,duplicate row,https://example.com/dup.jpg,0
";

    #[test]
    fn test_loads_records_and_unique_ids() {
        let store = CatalogStore::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.ids(), ["101", "102"]);
        assert_eq!(store.headers(), ["sample_id", "catalog_content", "image_link", "price"]);
    }

    #[test]
    fn test_get_returns_first_row_for_id() {
        let store = CatalogStore::from_reader(CSV.as_bytes()).unwrap();
        let record = store.get("101").unwrap();
        assert_eq!(record.content.as_deref(), Some("Item Name: Mug, Value: 4"));
        assert_eq!(record.image_ref, "https://example.com/101.jpg");
        assert_eq!(record.fields[3], ("price".to_string(), "9.99".to_string()));
    }

    #[test]
    fn test_empty_content_is_none() {
        let store = CatalogStore::from_reader(CSV.as_bytes()).unwrap();
        assert!(store.get("102").unwrap().content.is_none());
        assert!(store.get("999").is_none());
    }

    #[test]
    fn test_missing_image_column_rejected() {
        let csv = "sample_id,catalog_content\n1,Color: Red\n";
        match CatalogStore::from_reader(csv.as_bytes()) {
            Err(Error::MissingColumns { missing, .. }) => {
                assert_eq!(missing, vec!["image_link".to_string()]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_all_missing_columns_listed_in_order() {
        let csv = "name\nfoo\n";
        match CatalogStore::from_reader(csv.as_bytes()) {
            Err(Error::MissingColumns { missing, .. }) => {
                assert_eq!(missing, REQUIRED_COLUMNS.map(String::from).to_vec());
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_short_row_gets_empty_cells() {
        let csv = "sample_id,catalog_content,image_link,price\n1,a\n2,b,https://example.com/2.jpg,3\n";
        let store = CatalogStore::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(store.len(), 2);

        let short = store.get("1").unwrap();
        assert_eq!(short.image_ref, "");
        assert_eq!(short.fields[3], ("price".to_string(), String::new()));
        assert_eq!(store.get("2").unwrap().image_ref, "https://example.com/2.jpg");
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let csv: &[u8] = b"sample_id,catalog_content,image_link\n1,\xff,x\n";
        assert!(matches!(
            CatalogStore::from_reader(csv),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn test_open_missing_file_is_config_error() {
        let err = CatalogStore::open(Path::new("/nonexistent/prodview/train.csv")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("was not found"));
        assert!(msg.contains("/nonexistent/prodview/train.csv"));
    }
}
