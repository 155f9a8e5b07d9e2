use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UiLanguage {
    #[default]
    Ja,
    En,
}

impl UiLanguage {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ja" | "jp" | "japanese" => Some(UiLanguage::Ja),
            "en" | "english" => Some(UiLanguage::En),
            _ => None,
        }
    }
}

fn default_prompt() -> String {
    "単語> ".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct UiConfig {
    /// Language of status and error messages
    #[serde(default)]
    pub language: UiLanguage,
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Print outcomes as JSON lines instead of text
    #[serde(default)]
    pub json: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: UiLanguage::default(),
            prompt: default_prompt(),
            json: false,
        }
    }
}
