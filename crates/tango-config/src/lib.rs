use std::env;

use serde::{Deserialize, Serialize};

use self::lookup::LookupConfig;
use self::network::NetworkConfig;
use self::translator::TranslatorConfig;
use self::ui::{UiConfig, UiLanguage};

pub mod lookup;
pub mod network;
pub mod translator;
pub mod ui;

fn default_channel_capacity() -> usize {
    64
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub translator: TranslatorConfig,
    pub lookup: LookupConfig,
    pub ui: UiConfig,

    /// Capacity of the app <-> ui channels
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            translator: TranslatorConfig::default(),
            lookup: LookupConfig::default(),
            ui: UiConfig::default(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl Config {
    /// Defaults overridden by process environment
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_vars(|key| env::var(key).ok());
        config
    }

    /// Overlay values from a variable source onto this config.
    /// Unset or unparsable values leave the current field alone.
    pub fn apply_vars<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = var("TANGO_TRANSLATE_URL") {
            self.translator.api_url = url;
        }

        if let Some(key) = var("TANGO_TRANSLATE_KEY").or_else(|| var("DEEPL_API_KEY")) {
            self.translator.api_key = key;
        }

        if let Some(enabled) = var("TANGO_TRANSLATE_ENABLED").and_then(|v| v.parse().ok()) {
            self.translator.enabled = enabled;
        }

        if let Some(url) = var("TANGO_SEARCH_URL") {
            self.lookup.api_url = url;
        }

        if let Some(path) = var("TANGO_CATALOG_PATH").filter(|p| !p.is_empty()) {
            self.lookup.catalog_path = Some(path);
        }

        if let Some(max) = var("TANGO_MAX_RESULTS").and_then(|v| v.parse().ok()) {
            self.lookup.max_results = max;
        }

        if let Some(secs) = var("TANGO_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.network.timeout_seconds = secs;
        }

        if let Some(language) = var("TANGO_LANGUAGE").and_then(|v| UiLanguage::parse(&v)) {
            self.ui.language = language;
        }
    }
}
