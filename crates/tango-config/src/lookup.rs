use serde::{Deserialize, Serialize};
use tango_types::MatchMode;

fn default_api_url() -> String {
    "http://localhost:3000/search".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct LookupConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Local `{image_url, name}` dataset; takes precedence over `api_url`
    pub catalog_path: Option<String>,
    #[serde(default)]
    pub match_mode: MatchMode,
    /// 0 keeps every match
    #[serde(default)]
    pub max_results: usize,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            catalog_path: None,
            match_mode: MatchMode::default(),
            max_results: 0,
        }
    }
}
