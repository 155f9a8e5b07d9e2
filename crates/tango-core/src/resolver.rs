use tango_types::{BilingualPair, ScriptClass};

use crate::director::{Director, TranslationOutcome};
use crate::script::classify;

#[derive(Debug)]
pub struct Resolution {
    pub class: ScriptClass,
    pub pair: BilingualPair,
    pub translation: TranslationOutcome,
}

/// Turns raw input into an English/Japanese pair
#[derive(Clone)]
pub struct Resolver {
    director: Director,
}

impl Resolver {
    pub fn new(director: Director) -> Self {
        Self { director }
    }

    /// The input's own classification decides which slot it fills.
    /// The translated text is never classified again.
    pub async fn resolve(&self, raw: &str) -> Resolution {
        let class = classify(raw);
        let translation = self.director.direct(raw, class).await;
        let translated = translation.text_or(raw).to_string();

        let pair = match class {
            ScriptClass::English => BilingualPair {
                english: raw.to_string(),
                japanese: translated,
            },
            ScriptClass::Japanese | ScriptClass::Ambiguous => BilingualPair {
                english: translated,
                japanese: raw.to_string(),
            },
        };

        tracing::debug!(english = %pair.english, japanese = %pair.japanese, "resolved pair");

        Resolution {
            class,
            pair,
            translation,
        }
    }
}
