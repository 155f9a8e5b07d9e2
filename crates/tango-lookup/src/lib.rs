mod catalog;
mod http;

pub use catalog::{Catalog, CatalogError};
pub use http::HttpImageLookup;

use tango_types::LookupResult;

/// Illustration lookup keyed by Japanese text
#[async_trait::async_trait]
pub trait ImageLookup: Send + Sync {
    /// Every entry whose name contains `query`, case-insensitively, in dataset order
    async fn search(&self, query: &str) -> Result<LookupResult, LookupError>;

    /// Short description for logs
    fn describe(&self) -> String;
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Lookup service returned HTTP {0}")]
    Status(u16),

    #[error("Malformed lookup response: {0}")]
    Decode(String),
}

/// Case-insensitive substring match used by both the remote service and the local catalog
pub fn name_matches(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&query.to_lowercase())
}
