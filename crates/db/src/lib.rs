//! In-memory storage for the kennel service.
//!
//! [`DogStore`] plays the part a connection pool plays in a database-backed
//! service: it is cheap to clone and handed to every request through the
//! application state. All reads and writes go through [`DogRepo`].

use std::sync::Arc;

use kennel_core::dog::{seed_dogs, Dog};
use tokio::sync::RwLock;

pub mod repositories;

pub use repositories::DogRepo;

/// Shared handle to the ordered dog collection.
///
/// One lock guards the whole collection. Writers hold it for the full
/// scan-then-mutate sequence so no two writers interleave.
#[derive(Debug, Clone)]
pub struct DogStore {
    dogs: Arc<RwLock<Vec<Dog>>>,
    reject_duplicate_ids: bool,
}

impl DogStore {
    pub fn new(dogs: Vec<Dog>) -> Self {
        Self {
            dogs: Arc::new(RwLock::new(dogs)),
            reject_duplicate_ids: true,
        }
    }

    /// A store holding the four records the service ships with.
    pub fn seeded() -> Self {
        Self::new(seed_dogs())
    }

    /// Allow (`false`) or refuse (`true`, the default) creating a record
    /// whose id is already taken.
    pub fn with_duplicate_ids_rejected(mut self, reject: bool) -> Self {
        self.reject_duplicate_ids = reject;
        self
    }
}

impl Default for DogStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Build the store the server runs with.
pub fn create_store(seed: bool, reject_duplicate_ids: bool) -> DogStore {
    let store = if seed {
        DogStore::seeded()
    } else {
        DogStore::default()
    };
    tracing::debug!(seed, reject_duplicate_ids, "Dog store created");
    store.with_duplicate_ids_rejected(reject_duplicate_ids)
}

/// Number of records currently held. Used by the health endpoint.
pub async fn health_check(store: &DogStore) -> usize {
    store.dogs.read().await.len()
}
