pub mod director;
pub mod resolver;
pub mod script;
pub mod search;
pub mod state;

#[cfg(test)]
mod testing;

pub use director::{Director, TranslationOutcome, TranslationRequest};
pub use resolver::{Resolution, Resolver};
pub use script::classify;
pub use search::{SearchOptions, Searcher, TrackedOutcome};
pub use state::{SearchSnapshot, SearchState};
