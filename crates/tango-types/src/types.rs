use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw text submitted from the input side
    Search(String),
    /// Progress of a tracked search
    Phase { ticket: u64, phase: SearchPhase },
    ShowOutcome {
        ticket: u64,
        query: String,
        outcome: SearchOutcome,
    },
    /// Blank input was ignored
    SearchSkipped,
    Status(String),
    BackendReady,
    Quit,
}

/// One search action's input. Never trimmed or normalized: the untranslated
/// side of the resulting pair must equal it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    raw: String,
}

impl Query {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Empty or whitespace-only input is a no-op, not an error
    pub fn is_blank(&self) -> bool {
        self.raw.trim().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptClass {
    English,
    Japanese,
    Ambiguous,
}

/// Target language code understood by the translation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TargetLang {
    En,
    Ja,
}

impl TargetLang {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLang::En => "EN",
            TargetLang::Ja => "JA",
        }
    }
}

impl fmt::Display for TargetLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// English line + Japanese line shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BilingualPair {
    pub english: String,
    pub japanese: String,
}

impl BilingualPair {
    /// Both sides hold the same text, i.e. translation did not change anything
    pub fn is_degenerate(&self) -> bool {
        self.english == self.japanese
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    pub image_url: String,
    #[serde(alias = "title")]
    pub name: String,
}

pub type LookupResult = Vec<ImageEntry>;

/// How many matches the lookup side keeps
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    #[default]
    All,
    First,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    Success {
        pair: BilingualPair,
        results: LookupResult,
    },
    Failure {
        reason: String,
    },
}

impl SearchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchOutcome::Success { .. })
    }

    pub fn pair(&self) -> Option<&BilingualPair> {
        match self {
            SearchOutcome::Success { pair, .. } => Some(pair),
            SearchOutcome::Failure { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Resolving,
    LookingUp,
    Done,
    Failed,
}

impl SearchPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, SearchPhase::Resolving | SearchPhase::LookingUp)
    }
}
