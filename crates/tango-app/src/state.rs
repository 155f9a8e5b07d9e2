use std::sync::Arc;

use tango_config::Config;
use tango_core::{SearchState, Searcher};
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub searcher: Searcher,
    pub search: SearchState,
}

impl AppState {
    pub fn new(config: Config, searcher: Searcher) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            searcher,
            search: SearchState::new(),
        }
    }
}
