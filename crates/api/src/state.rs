use kennel_db::DogStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the store is a handle over an `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The dog collection.
    pub store: DogStore,
}

impl AppState {
    /// Build the state for a loaded configuration, creating the store it asks for.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            store: kennel_db::create_store(config.seed_dogs, config.reject_duplicate_ids),
        }
    }
}
