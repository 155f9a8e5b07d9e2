use std::sync::Arc;

use tango_translator::{TranslateError, Translator};
use tango_types::{ScriptClass, TargetLang};

/// What is sent to the translation service. There is no source language;
/// direction is carried by `target_lang` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub target_lang: TargetLang,
}

impl TranslationRequest {
    pub fn new(text: impl Into<String>, class: ScriptClass) -> Self {
        Self {
            text: text.into(),
            target_lang: target_for(class),
        }
    }
}

/// English goes to Japanese; everything else, ambiguous input included, goes to English
pub fn target_for(class: ScriptClass) -> TargetLang {
    match class {
        ScriptClass::English => TargetLang::Ja,
        ScriptClass::Japanese | ScriptClass::Ambiguous => TargetLang::En,
    }
}

#[derive(Debug)]
pub enum TranslationOutcome {
    Translated { text: String },
    Unchanged { cause: TranslateError },
}

impl TranslationOutcome {
    /// The translated text, or `original` when translation did not happen
    pub fn text_or<'a>(&'a self, original: &'a str) -> &'a str {
        match self {
            TranslationOutcome::Translated { text } => text,
            TranslationOutcome::Unchanged { .. } => original,
        }
    }

    pub fn is_translated(&self) -> bool {
        matches!(self, TranslationOutcome::Translated { .. })
    }
}

/// Picks the translation direction and absorbs translation failures
#[derive(Clone)]
pub struct Director {
    translator: Arc<dyn Translator>,
}

impl Director {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    /// One call to the translator, never retried
    pub async fn direct(&self, text: &str, class: ScriptClass) -> TranslationOutcome {
        let request = TranslationRequest::new(text, class);
        tracing::debug!(?class, target_lang = %request.target_lang, "translating {:?}", text);

        match self
            .translator
            .translate(&request.text, request.target_lang)
            .await
        {
            Ok(translation) => {
                tracing::debug!("translated {:?} -> {:?}", text, translation.text);
                TranslationOutcome::Translated {
                    text: translation.text,
                }
            }
            Err(cause) => {
                tracing::warn!("translation failed, keeping original text: {cause}");
                TranslationOutcome::Unchanged { cause }
            }
        }
    }
}
