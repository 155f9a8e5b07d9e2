use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tango_lookup::{ImageLookup, LookupError, name_matches};
use tango_translator::{ProviderMetadata, TranslateError, Translation, Translator};
use tango_types::{ImageEntry, LookupResult, TargetLang};

/// Dictionary-backed translator. Unknown words yield an empty translation list.
pub struct FakeTranslator {
    dictionary: HashMap<String, String>,
    fail: bool,
    calls: Mutex<Vec<(String, TargetLang)>>,
}

impl FakeTranslator {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        Self {
            dictionary: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Behaves like a service answering HTTP 500
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with(&[])
        }
    }

    pub fn calls(&self) -> Vec<(String, TargetLang)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, text: &str, to: TargetLang) -> Result<Translation, TranslateError> {
        self.calls.lock().unwrap().push((text.to_string(), to));

        if self.fail {
            return Err(TranslateError::ApiError("HTTP 500 Internal Server Error".to_string()));
        }

        let translated = self
            .dictionary
            .get(text)
            .ok_or(TranslateError::EmptyTranslation)?;

        Ok(Translation {
            text: translated.clone(),
            to,
            detected_source: None,
            provider: "fake".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "fake".to_string(),
            endpoint: String::new(),
            requires_api_key: false,
        }
    }
}

/// In-memory lookup that records every query and can be slowed down per query
pub struct FakeLookup {
    entries: Vec<ImageEntry>,
    fail: bool,
    delays: HashMap<String, Duration>,
    queries: Mutex<Vec<String>>,
}

impl FakeLookup {
    pub fn with(names: &[&str]) -> Self {
        Self {
            entries: names
                .iter()
                .map(|name| ImageEntry {
                    image_url: format!("https://img.example/{}.png", name),
                    name: name.to_string(),
                })
                .collect(),
            fail: false,
            delays: HashMap::new(),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::with(&[])
        }
    }

    pub fn delayed(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageLookup for FakeLookup {
    async fn search(&self, query: &str) -> Result<LookupResult, LookupError> {
        self.queries.lock().unwrap().push(query.to_string());

        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }

        if self.fail {
            return Err(LookupError::Status(503));
        }

        Ok(self
            .entries
            .iter()
            .filter(|entry| name_matches(&entry.name, query))
            .cloned()
            .collect())
    }

    fn describe(&self) -> String {
        "fake".to_string()
    }
}
