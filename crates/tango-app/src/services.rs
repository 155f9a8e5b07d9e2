use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tango_config::Config;
use tango_core::{SearchOptions, Searcher};
use tango_lookup::{Catalog, HttpImageLookup, ImageLookup};
use tango_translator::{DisabledTranslator, HttpTranslator, Translator};

/// Wire the configured translator and lookup into a searcher
pub fn build_searcher(config: &Config) -> anyhow::Result<Searcher> {
    let timeout = Duration::from_secs(config.network.timeout_seconds);
    let client = reqwest_client(config, timeout)?;

    let translator: Arc<dyn Translator> = if config.translator.enabled {
        Arc::new(HttpTranslator::with_client(
            client.clone(),
            config.translator.api_url.clone(),
            config.translator.api_key.clone(),
        ))
    } else {
        tracing::warn!("Translation disabled, pairs will repeat the input");
        Arc::new(DisabledTranslator)
    };
    let metadata = translator.metadata();
    tracing::info!(
        "Translator: {} {} (api key: {})",
        metadata.name,
        metadata.endpoint,
        metadata.requires_api_key
    );

    let lookup: Arc<dyn ImageLookup> = match &config.lookup.catalog_path {
        Some(path) => Arc::new(Catalog::load_from_file(Path::new(path))?),
        None => Arc::new(HttpImageLookup::with_client(
            client,
            config.lookup.api_url.clone(),
        )),
    };
    tracing::info!("Image lookup: {}", lookup.describe());

    Ok(Searcher::new(
        translator,
        lookup,
        SearchOptions {
            match_mode: config.lookup.match_mode,
            max_results: config.lookup.max_results,
        },
    ))
}

fn reqwest_client(config: &Config, timeout: Duration) -> anyhow::Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(config.network.user_agent.clone())
        .build()?;
    Ok(client)
}
