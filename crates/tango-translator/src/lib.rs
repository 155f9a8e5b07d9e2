mod http;

pub use http::HttpTranslator;

use tango_types::TargetLang;

/// Translation provider interface.
///
/// Direction is expressed only through the target language; providers are
/// expected to detect the source themselves.
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `to`, returning the first candidate
    async fn translate(&self, text: &str, to: TargetLang) -> Result<Translation, TranslateError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    pub to: TargetLang,
    /// Source language reported by the provider, if any
    pub detected_source: Option<String>,
    pub provider: String,
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub endpoint: String,
    pub requires_api_key: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Response contained no translations")]
    EmptyTranslation,

    #[error("Translation disabled")]
    Disabled,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}

/// Stand-in used when translation is switched off in config.
/// Every call fails, so callers fall back to the original text.
pub struct DisabledTranslator;

#[async_trait::async_trait]
impl Translator for DisabledTranslator {
    async fn translate(&self, _text: &str, _to: TargetLang) -> Result<Translation, TranslateError> {
        Err(TranslateError::Disabled)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "disabled".to_string(),
            endpoint: String::new(),
            requires_api_key: false,
        }
    }
}
