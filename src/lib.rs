//! `prodview` - terminal viewer for product catalog records.
//!
//! Loads a CSV catalog and renders each record's free-text catalog content as
//! structured key/value blocks with keyword highlighting.

// Re-export public modules for use in integration tests and as a library
pub mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatter;
pub mod image;
pub mod input;
pub mod logging;
pub mod markup;
pub mod report;
pub mod search;
pub mod store;
pub mod ui;
