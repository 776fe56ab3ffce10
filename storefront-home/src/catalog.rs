//! Catalog fixture loading.
//!
//! The home page reads its region and collections from a JSON document
//! shaped like the commerce backend's responses. Without a configured file
//! the bundled sample catalog is used.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use storefront_model::{Collection, Region};
use thiserror::Error;

/// Sample catalog compiled into the binary.
pub const SAMPLE_CATALOG: &str = include_str!("../../demo/catalog.json");

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Catalog {
    pub region: Region,
    pub collections: Vec<Collection>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {message}", path.display())]
    Read { path: PathBuf, message: String },
    #[error("invalid catalog {origin}: {message}")]
    Parse { origin: String, message: String },
}

impl Catalog {
    pub fn parse(raw: &str, origin: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(raw).map_err(|err| CatalogError::Parse {
            origin: origin.to_string(),
            message: err.to_string(),
        })
    }

    pub fn sample() -> Result<Self, CatalogError> {
        Self::parse(SAMPLE_CATALOG, "<bundled sample>")
    }

    /// Read the catalog at `path`, or the bundled sample when `None`.
    pub async fn load(path: Option<PathBuf>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load_file(&path).await,
            None => Self::sample(),
        }
    }

    async fn load_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|err| {
            CatalogError::Read {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        })?;
        Self::parse(&raw, &path.display().to_string())
    }

    pub fn product_count(&self) -> usize {
        self.collections
            .iter()
            .filter_map(|collection| collection.products.as_ref())
            .map(Vec::len)
            .sum()
    }
}
