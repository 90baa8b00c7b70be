use crate::types::DogId;

/// Message returned whenever a lookup by id finds nothing.
pub const DOG_NOT_FOUND: &str = "The dog with the given ID does not exist in the database.";

/// Message returned when the body of an update names a different id than the URL.
pub const CONFLICTING_IDS: &str = "Conflicting IDs - please make sure that the ID in your URL is correct, and remove the ID field from your request body.";

/// Message returned when a create would reuse an id already in the store.
pub const DUPLICATE_ID: &str = "A dog with the given ID already exists in the database.";

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{}", DOG_NOT_FOUND)]
    NotFound { id: DogId },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{}", CONFLICTING_IDS)]
    IdMismatch { path_id: DogId, body_id: DogId },
}

impl CoreError {
    pub fn not_found(id: impl Into<DogId>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn duplicate_id() -> Self {
        Self::Conflict(DUPLICATE_ID.to_string())
    }
}
