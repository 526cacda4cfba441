//! Product image references.
//!
//! The terminal cannot draw images, so a reference is only classified and
//! checked before it is shown.

use std::fmt;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// A validated image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// `http` or `https` URL.
    Remote(String),
    /// Existing file on disk.
    Local(PathBuf),
}

impl ImageRef {
    /// Classify and validate a raw reference from the catalog.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::image("empty image reference"));
        }

        if let Some((scheme, rest)) = raw.split_once("://") {
            if !matches!(scheme.to_ascii_lowercase().as_str(), "http" | "https") {
                return Err(Error::image(format!("unsupported scheme '{scheme}' in '{raw}'")));
            }
            let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
            if host.is_empty() || host.contains(char::is_whitespace) {
                return Err(Error::image(format!("missing or malformed host in '{raw}'")));
            }
            return Ok(Self::Remote(raw.to_string()));
        }

        let path = PathBuf::from(shellexpand::tilde(raw).into_owned());
        if !path.is_file() {
            return Err(Error::image(format!("file not found: {}", path.display())));
        }
        Ok(Self::Local(path))
    }

    /// Short label for the reference type.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Remote(_) => "Remote image",
            Self::Local(_) => "Local image",
        }
    }

    /// Text form of the reference, as copied to the clipboard.
    pub fn as_str(&self) -> String {
        match self {
            Self::Remote(url) => url.clone(),
            Self::Local(path) => path.display().to_string(),
        }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind(), self.as_str())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_https_url_is_remote() {
        let img = ImageRef::parse(" https://m.media-amazon.com/images/I/51.jpg ").unwrap();
        assert_eq!(img, ImageRef::Remote("https://m.media-amazon.com/images/I/51.jpg".to_string()));
        assert_eq!(img.kind(), "Remote image");
    }

    #[test]
    fn test_empty_reference_rejected() {
        assert!(matches!(ImageRef::parse("   "), Err(Error::Image(_))));
    }

    #[test]
    fn test_unsupported_scheme_rejected() {
        let err = ImageRef::parse("ftp://example.com/a.png").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_url_without_host_rejected() {
        assert!(ImageRef::parse("https:///a.png").is_err());
    }

    #[test]
    fn test_local_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("mug.jpg");
        std::fs::write(&file, b"jpg").unwrap();

        let img = ImageRef::parse(file.to_str().unwrap()).unwrap();
        assert_eq!(img, ImageRef::Local(file.clone()));
        assert!(img.to_string().starts_with("Local image: "));

        let missing = dir.path().join("missing.jpg");
        assert!(ImageRef::parse(missing.to_str().unwrap()).is_err());
    }
}
