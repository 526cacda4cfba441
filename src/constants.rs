//! Application constants.
//!
//! Centralizes the keyword list, column names and layout values.

/// Content formatting constants.
pub mod formatting {
    /// Phrases emphasized wherever they appear as whole words, case-insensitively.
    ///
    /// Order matters: each phrase is applied over the output of the previous one.
    pub const KEYWORDS: [&str; 5] = ["Unit", "Value", "Bullet Point", "Bullet Poin", "Item Name"];

    /// Replacement used for keyword matches; `${1}` is the matched text.
    pub const HIGHLIGHT_TEMPLATE: &str = r#"<span style="color:red; font-weight:bold;">${1}</span>"#;

    /// Opening tag of a keyword highlight, as produced by [`HIGHLIGHT_TEMPLATE`].
    pub const HIGHLIGHT_OPEN: &str = r#"<span style="color:red; font-weight:bold;">"#;

    /// Substituted for records without catalog content.
    pub const FALLBACK_CONTENT: &str = "No description available.";

    /// Bullet entity prefixed to sentence lines.
    pub const BULLET: &str = "&bull;";

    /// Glyph the bullet entity renders as.
    pub const BULLET_GLYPH: &str = "\u{2022}";
}

/// Catalog file constants.
pub mod catalog {
    /// Unique record identifier column.
    pub const ID_COLUMN: &str = "sample_id";

    /// Image URL or path column.
    pub const IMAGE_COLUMN: &str = "image_link";

    /// Free-text catalog content column.
    pub const CONTENT_COLUMN: &str = "catalog_content";

    /// Columns a catalog must provide, in the order they are reported.
    pub const REQUIRED_COLUMNS: [&str; 3] = [ID_COLUMN, IMAGE_COLUMN, CONTENT_COLUMN];

    /// Catalog path used when nothing is configured.
    pub const DEFAULT_CATALOG_PATH: &str = "dataset/train.csv";
}

/// UI layout constants.
pub mod ui {
    /// Width of the record sidebar, borders included.
    pub const SIDEBAR_WIDTH: u16 = 30;

    /// Share of the detail area given to the description panes.
    pub const DESCRIPTION_PERCENT: u16 = 55;

    /// Share of the lower detail row given to the image panel.
    pub const IMAGE_PANEL_PERCENT: u16 = 33;

    /// Rows moved by page up/down in the record list.
    pub const PAGE_SIZE: usize = 10;

    /// Event poll interval in milliseconds.
    pub const POLL_INTERVAL_MS: u64 = 50;
}
