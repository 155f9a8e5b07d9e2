use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tango_types::TargetLang;

use crate::{ProviderMetadata, TranslateError, Translation, Translator};

/// Client for a DeepL-shaped `GET ?q=&target_lang=` translation endpoint
#[derive(Clone)]
pub struct HttpTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl HttpTranslator {
    pub fn new(api_url: String, api_key: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, api_url, api_key))
    }

    pub fn with_client(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_key,
            api_url,
        }
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, text: &str, to: TargetLang) -> Result<Translation, TranslateError> {
        let params = [("q", text), ("target_lang", to.as_str())];

        let mut request = self.client.get(&self.api_url).query(&params);
        if !self.api_key.is_empty() {
            request = request.header("Authorization", format!("DeepL-Auth-Key {}", self.api_key));
        }

        tracing::debug!(url = %self.api_url, target_lang = %to, "requesting translation");
        let response = request.send().await?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => return Err(TranslateError::RateLimitExceeded),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(TranslateError::AuthenticationError);
            }
            status if !status.is_success() => {
                return Err(TranslateError::ApiError(format!("HTTP {}", status)));
            }
            _ => {}
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        let candidate = json["translations"]
            .get(0)
            .ok_or(TranslateError::EmptyTranslation)?;

        let translated_text = candidate["text"]
            .as_str()
            .filter(|t| !t.is_empty())
            .ok_or(TranslateError::EmptyTranslation)?;

        Ok(Translation {
            text: translated_text.to_string(),
            to,
            detected_source: candidate["detected_source_language"]
                .as_str()
                .map(str::to_lowercase),
            provider: "http".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "http".to_string(),
            endpoint: self.api_url.clone(),
            requires_api_key: !self.api_key.is_empty(),
        }
    }
}
