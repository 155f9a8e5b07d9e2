use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tango_types::{ImageEntry, LookupResult};

use crate::{ImageLookup, LookupError, name_matches};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Accepts both a bare array and the service's `{ "results": [...] }` envelope
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<ImageEntry>),
    Wrapped { results: Vec<ImageEntry> },
}

impl From<CatalogFile> for Vec<ImageEntry> {
    fn from(file: CatalogFile) -> Self {
        match file {
            CatalogFile::Bare(entries) => entries,
            CatalogFile::Wrapped { results } => results,
        }
    }
}

/// In-process illustration dataset, matched the same way as the lookup service
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<ImageEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<ImageEntry>) -> Self {
        Self { entries }
    }

    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let shown = path.display().to_string();
        let data = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: shown.clone(),
            source,
        })?;
        let catalog = Self::from_json(&data).map_err(|source| CatalogError::Parse {
            path: shown.clone(),
            source,
        })?;

        tracing::info!("Loaded {} catalog entries from {}", catalog.len(), shown);
        Ok(catalog)
    }

    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        let file: CatalogFile = serde_json::from_str(data)?;
        Ok(Self::new(file.into()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose name contains `query`; empty query returns everything
    pub fn matching(&self, query: &str) -> LookupResult {
        self.entries
            .iter()
            .filter(|entry| name_matches(&entry.name, query))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ImageLookup for Catalog {
    async fn search(&self, query: &str) -> Result<LookupResult, LookupError> {
        Ok(self.matching(query))
    }

    fn describe(&self) -> String {
        format!("catalog ({} entries)", self.entries.len())
    }
}
