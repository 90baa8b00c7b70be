//! Repository for the in-memory dog collection.

use kennel_core::dog::{Dog, DogPatch};
use kennel_core::error::CoreError;

use crate::DogStore;

/// Provides CRUD operations over a [`DogStore`].
///
/// Lookups scan the collection in stored order and act on the first record
/// whose id matches, so duplicate ids (possible only when duplicate
/// rejection is turned off) resolve to the earliest insert.
pub struct DogRepo;

impl DogRepo {
    /// List every record in insertion order.
    pub async fn list(store: &DogStore) -> Vec<Dog> {
        store.dogs.read().await.clone()
    }

    /// Find the first record with the given id.
    pub async fn find_by_id(store: &DogStore, id: &str) -> Option<Dog> {
        let dogs = store.dogs.read().await;
        dogs.iter().find(|d| d.id == id).cloned()
    }

    /// Append a record to the end of the collection.
    ///
    /// The caller is expected to have run [`Dog::validate_new`]. Returns
    /// [`CoreError::Conflict`] if the store rejects duplicate ids and the id
    /// is already present; the check and the append share one write lock.
    pub async fn create(store: &DogStore, dog: Dog) -> Result<Dog, CoreError> {
        let mut dogs = store.dogs.write().await;
        if store.reject_duplicate_ids && dogs.iter().any(|d| d.id == dog.id) {
            return Err(CoreError::duplicate_id());
        }
        dogs.push(dog.clone());
        Ok(dog)
    }

    /// Merge `patch` into the first record with the given id.
    ///
    /// Returns the updated record, or `None` if no record matches.
    pub async fn update(store: &DogStore, id: &str, patch: &DogPatch) -> Option<Dog> {
        let mut dogs = store.dogs.write().await;
        let dog = dogs.iter_mut().find(|d| d.id == id)?;
        dog.merge(patch);
        Some(dog.clone())
    }

    /// Remove the first record with the given id, keeping the order of the
    /// rest.
    ///
    /// Returns `true` if a record was removed.
    pub async fn delete(store: &DogStore, id: &str) -> bool {
        let mut dogs = store.dogs.write().await;
        match dogs.iter().position(|d| d.id == id) {
            Some(index) => {
                dogs.remove(index);
                true
            }
            None => false,
        }
    }
}
