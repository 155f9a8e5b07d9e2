use std::collections::HashMap;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tango_lookup::{Catalog, ImageLookup, LookupError};
use tango_translator::{ProviderMetadata, TranslateError, Translation, Translator};
use tango_types::{ImageEntry, LookupResult, TargetLang};

pub struct MapTranslator(pub HashMap<&'static str, &'static str>);

#[async_trait]
impl Translator for MapTranslator {
    async fn translate(&self, text: &str, to: TargetLang) -> Result<Translation, TranslateError> {
        let translated = self.0.get(text).ok_or(TranslateError::EmptyTranslation)?;
        Ok(Translation {
            text: translated.to_string(),
            to,
            detected_source: None,
            provider: "map".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "map".to_string(),
            endpoint: String::new(),
            requires_api_key: false,
        }
    }
}

pub struct DownLookup;

#[async_trait]
impl ImageLookup for DownLookup {
    async fn search(&self, _query: &str) -> Result<LookupResult, LookupError> {
        Err(LookupError::Status(502))
    }

    fn describe(&self) -> String {
        "down".to_string()
    }
}

/// Wraps a lookup and sleeps per query before answering
pub struct SlowLookup {
    pub inner: Arc<dyn ImageLookup>,
    pub delays: HashMap<&'static str, Duration>,
}

#[async_trait]
impl ImageLookup for SlowLookup {
    async fn search(&self, query: &str) -> Result<LookupResult, LookupError> {
        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        self.inner.search(query).await
    }

    fn describe(&self) -> String {
        format!("slow {}", self.inner.describe())
    }
}

pub fn translator() -> Arc<MapTranslator> {
    Arc::new(MapTranslator(HashMap::from([
        ("dog", "犬"),
        ("cat", "猫"),
        ("世界", "world"),
    ])))
}

pub fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::new(vec![
        ImageEntry {
            image_url: "https://img.example/inu.png".to_string(),
            name: "犬のイラスト".to_string(),
        },
        ImageEntry {
            image_url: "https://img.example/neko.png".to_string(),
            name: "猫のイラスト".to_string(),
        },
    ]))
}

/// Clonable in-memory stdout
#[derive(Clone, Default)]
pub struct SharedBuf(pub Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
