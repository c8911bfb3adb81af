//! Page Catalog
//!
//! Ordered list of selectable page identifiers. Built once from menu
//! initialization data (`{"json": [...]}`) or by scanning the resource
//! directory, and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Menu initialization data, as injected into the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MenuData {
    pub json: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid menu data in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageCatalog {
    pages: Vec<String>,
}

impl PageCatalog {
    /// Keeps entries exactly as given: no sorting, no dedup
    pub fn from_menu_data(data: MenuData) -> Self {
        Self { pages: data.json }
    }

    pub fn from_menu_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let data: MenuData = serde_json::from_str(&contents).map_err(|source| CatalogError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        tracing::debug!("Loaded {} menu entries from {}", data.json.len(), path.display());
        Ok(Self::from_menu_data(data))
    }

    /// Catalog from the `*.json` stems of a directory, sorted by name
    pub fn scan_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let io_err = |source: std::io::Error| CatalogError::Io {
            path: dir.display().to_string(),
            source,
        };

        let mut pages = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                pages.push(stem.to_string());
            }
        }
        pages.sort();

        tracing::debug!("Scanned {} pages from {}", pages.len(), dir.display());
        Ok(Self { pages })
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn to_menu_data(&self) -> MenuData {
        MenuData {
            json: self.pages.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
    }

    #[test]
    fn test_menu_data_order_and_duplicates_kept() {
        let data: MenuData = serde_json::from_str(r#"{"json": ["b", "a", "b"]}"#).unwrap();
        let catalog = PageCatalog::from_menu_data(data);
        assert_eq!(catalog.pages(), &["b", "a", "b"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_menu_file() {
        let catalog = PageCatalog::from_menu_file(fixtures().join("menu_data.json")).unwrap();
        assert_eq!(catalog.pages(), &["1r", "2v", "hover", "broken", "missing"]);
    }

    #[test]
    fn test_menu_file_missing() {
        let err = PageCatalog::from_menu_file(fixtures().join("nope.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_scan_dir_sorted_stems() {
        let catalog = PageCatalog::scan_dir(fixtures().join("json")).unwrap();
        assert_eq!(catalog.pages(), &["1r", "2v", "broken", "hover", "untrusted"]);
    }
}
