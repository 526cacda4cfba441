//! Application configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

use crate::constants::catalog::DEFAULT_CATALOG_PATH;
use crate::error::Result;

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// CSV file holding the product catalog
    pub catalog_path: PathBuf,
    /// File the log is written to; `None` disables logging
    pub log_path: Option<PathBuf>,
    /// Default log level when `RUST_LOG` is not set
    pub log_level: String,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            log_path: default_log_path(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    #[allow(clippy::unnecessary_wraps)] // Returns Result for forward-compatible API
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        let mut config = Self::default();

        if let Ok(path) = env::var("CATALOG_CSV") {
            config.catalog_path = expand_path(&path);
        }

        // An empty value turns file logging off
        if let Ok(path) = env::var("PRODVIEW_LOG_FILE") {
            config.log_path = (!path.trim().is_empty()).then(|| expand_path(&path));
        }

        if let Ok(level) = env::var("PRODVIEW_LOG_LEVEL") {
            if !level.trim().is_empty() {
                config.log_level = level.trim().to_lowercase();
            }
        }

        Ok(config)
    }

    /// Override the catalog path, e.g. from a command line argument
    #[must_use]
    pub fn with_catalog_path(mut self, path: &str) -> Self {
        self.catalog_path = expand_path(path);
        self
    }
}

fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path.trim()).to_string())
}

/// `<data dir>/prodview/prodview.log`, when a data directory is known
fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join(env!("CARGO_PKG_NAME")).join("prodview.log"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn default_points_at_dataset() {
        let config = Config::default();
        assert_eq!(config.catalog_path, PathBuf::from("dataset/train.csv"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.app_name(), "prodview");
    }

    #[test]
    fn catalog_path_override_expands_tilde() {
        let config = Config::default().with_catalog_path("~/data/train.csv");
        assert!(config.catalog_path.ends_with("data/train.csv"));
    }
}
