//! Loader for RON content tables.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::loaders::{LoadResult, read_file};

/// Loader for a single content table, stored as a RON list.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a table from a RON file.
    pub fn load<T: DeserializeOwned>(path: &Path) -> LoadResult<Vec<T>> {
        let content = read_file(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse a table from RON source. `name` only labels errors.
    pub fn parse<T: DeserializeOwned>(source: &str, name: &str) -> LoadResult<Vec<T>> {
        ron::from_str(source).map_err(|e| anyhow::anyhow!("Failed to parse {} RON: {}", name, e))
    }
}
