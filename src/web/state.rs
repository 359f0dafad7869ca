//! Application state shared across handlers

use crate::autocomplete::Autocompleter;
use crate::config::Settings;
use crate::engines::EngineRegistry;
use crate::network::HttpClient;
use crate::results::ResultFilter;
use crate::search::Search;
use std::sync::Arc;

/// Shared application state. Everything in it is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Engine registry
    pub registry: Arc<EngineRegistry>,
    /// Upstream search client
    pub search: Arc<Search>,
    /// Upstream suggest client
    pub autocompleter: Arc<Autocompleter>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, client: HttpClient) -> Self {
        let filter = ResultFilter::new(&settings.filter);
        let search = Search::new(client.clone(), &settings.upstream, filter);
        let autocompleter = Autocompleter::new(client, &settings.upstream, &settings.suggest);

        Self {
            settings: Arc::new(settings),
            registry: Arc::new(EngineRegistry::builtin()),
            search: Arc::new(search),
            autocompleter: Arc::new(autocompleter),
        }
    }
}
