//! Headless rendering of catalog records.
//!
//! Builds the same formatted and highlighted content the viewer shows, as
//! markup or plain text, for printing or JSON output.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::formatter::{coerce_content, format_content, highlight_keywords};
use crate::markup;
use crate::store::{CatalogStore, Record};

/// A record together with its rendered content.
#[derive(Debug, Serialize)]
pub struct FormattedRecord<'a> {
    /// The source row, flattened into the JSON object.
    #[serde(flatten)]
    pub record: &'a Record,
    /// Structured content.
    pub formatted: String,
    /// Raw content with keyword emphasis only.
    pub highlighted_raw: String,
}

impl<'a> FormattedRecord<'a> {
    /// Render a record; `plain` strips all markup.
    pub fn build(record: &'a Record, plain: bool) -> Self {
        let raw = coerce_content(record.content.as_deref());
        let mut formatted = format_content(&raw);
        let mut highlighted_raw = highlight_keywords(&raw);
        if plain {
            formatted = markup::to_plain(&formatted);
            highlighted_raw = markup::to_plain(&highlighted_raw);
        }
        Self { record, formatted, highlighted_raw }
    }

    /// Text block used by the non-JSON output.
    pub fn to_block(&self) -> String {
        format!(
            "=== {} ===\n{}\n--- raw ---\n{}\n",
            self.record.id, self.formatted, self.highlighted_raw
        )
    }

    /// Single-line JSON object.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| Error::Msg(e.to_string()))
    }
}

/// Records for the requested ids, or every unique id when none are given.
///
/// Fails on the first id not present in the catalog.
pub fn select_records<'a>(store: &'a CatalogStore, ids: &[String]) -> Result<Vec<&'a Record>> {
    if ids.is_empty() {
        return Ok(store.ids().iter().filter_map(|id| store.get(id)).collect());
    }
    ids.iter()
        .map(|id| store.get(id).ok_or_else(|| Error::UnknownId(id.clone())))
        .collect()
}
