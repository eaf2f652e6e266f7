use std::sync::Arc;

use crate::cache::PlaceCache;
use crate::config::Config;
use crate::contact::{ContactStore, InMemoryContactStore};
use crate::data::PlacesClient;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<PlaceCache>,
    pub contacts: Arc<dyn ContactStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires the Places client, the place cache and the in-memory contact store
    pub fn new(config: Config) -> Self {
        let client = PlacesClient::new(&config.place_id, &config.api_key)
            .with_base_url(&config.api_base_url);
        let cache = PlaceCache::new(Arc::new(client), config.cache_ttl);

        Self::with_parts(config, cache, Arc::new(InMemoryContactStore::new()))
    }

    pub fn with_parts(config: Config, cache: PlaceCache, contacts: Arc<dyn ContactStore>) -> Self {
        Self {
            cache: Arc::new(cache),
            contacts,
            config: Arc::new(config),
        }
    }
}
