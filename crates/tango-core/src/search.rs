use std::sync::Arc;

use tango_lookup::ImageLookup;
use tango_translator::Translator;
use tango_types::{LookupResult, MatchMode, Query, SearchOutcome, SearchPhase};

use crate::director::Director;
use crate::resolver::Resolver;
use crate::state::SearchState;

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    pub match_mode: MatchMode,
    /// 0 keeps every match
    pub max_results: usize,
}

impl SearchOptions {
    fn project(&self, mut results: LookupResult) -> LookupResult {
        if self.match_mode == MatchMode::First {
            results.truncate(1);
        }
        if self.max_results > 0 {
            results.truncate(self.max_results);
        }
        results
    }
}

#[derive(Debug, Clone)]
pub struct TrackedOutcome {
    pub ticket: u64,
    pub outcome: SearchOutcome,
    /// False when a newer search had already installed its outcome
    pub accepted: bool,
}

/// Resolve -> lookup -> project, one action at a time
#[derive(Clone)]
pub struct Searcher {
    resolver: Resolver,
    lookup: Arc<dyn ImageLookup>,
    options: SearchOptions,
}

impl Searcher {
    pub fn new(
        translator: Arc<dyn Translator>,
        lookup: Arc<dyn ImageLookup>,
        options: SearchOptions,
    ) -> Self {
        Self {
            resolver: Resolver::new(Director::new(translator)),
            lookup,
            options,
        }
    }

    /// `None` for blank input; nothing is sent anywhere in that case
    pub async fn search(&self, raw: &str) -> Option<SearchOutcome> {
        let query = Query::new(raw);
        if query.is_blank() {
            tracing::debug!("ignoring blank query");
            return None;
        }

        Some(self.execute(&query, |_| {}).await)
    }

    /// Same as [`Searcher::search`], publishing phases and the outcome to `state`
    pub async fn search_tracked(&self, raw: &str, state: &SearchState) -> Option<TrackedOutcome> {
        let query = Query::new(raw);
        if query.is_blank() {
            tracing::debug!("ignoring blank query");
            return None;
        }

        let ticket = state.begin(query.raw());
        let outcome = self
            .execute(&query, |phase| {
                state.advance(ticket, phase);
            })
            .await;
        let accepted = state.finish(ticket, outcome.clone());

        Some(TrackedOutcome {
            ticket,
            outcome,
            accepted,
        })
    }

    async fn execute<F>(&self, query: &Query, on_phase: F) -> SearchOutcome
    where
        F: Fn(SearchPhase),
    {
        on_phase(SearchPhase::Resolving);
        let resolution = self.resolver.resolve(query.raw()).await;

        // The illustration dataset is keyed in Japanese whatever the input script was
        on_phase(SearchPhase::LookingUp);
        let lookup_query = resolution.pair.japanese.as_str();
        tracing::info!(
            english = %resolution.pair.english,
            japanese = %resolution.pair.japanese,
            "looking up illustrations for {:?}",
            lookup_query
        );

        match self.lookup.search(lookup_query).await {
            Ok(results) => {
                let results = self.options.project(results);
                tracing::debug!("lookup returned {} results", results.len());
                SearchOutcome::Success {
                    pair: resolution.pair,
                    results,
                }
            }
            Err(e) => {
                tracing::warn!("lookup via {} failed: {e}", self.lookup.describe());
                SearchOutcome::Failure {
                    reason: e.to_string(),
                }
            }
        }
    }
}
