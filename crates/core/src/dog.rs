//! The `Dog` record and the rules that govern creating and merging it.
//!
//! Every field is a plain string. A field missing from a request body
//! deserializes as `""`, and the empty string is what the rules below treat
//! as "not provided".

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DogId;

pub const ID_REQUIRED: &str = "ID must be provided when creating a new dog.";
pub const NAME_REQUIRED: &str = "Name must be provided when creating a new dog.";

/// A single record in the kennel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dog {
    pub id: DogId,
    pub name: String,
    pub breed: String,
    pub owner: String,
}

/// Body of a merge update. Empty fields leave the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DogPatch {
    pub id: DogId,
    pub name: String,
    pub breed: String,
    pub owner: String,
}

impl Dog {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        breed: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            breed: breed.into(),
            owner: owner.into(),
        }
    }

    /// Check the fields a new record must carry.
    ///
    /// `id` is checked before `name`, so a body missing both reports the id.
    pub fn validate_new(&self) -> Result<(), CoreError> {
        if self.id.is_empty() {
            return Err(CoreError::Validation(ID_REQUIRED.to_string()));
        }
        if self.name.is_empty() {
            return Err(CoreError::Validation(NAME_REQUIRED.to_string()));
        }
        Ok(())
    }

    /// Overwrite `name`, `breed` and `owner` with the non-empty fields of
    /// `patch`. The id is never touched.
    pub fn merge(&mut self, patch: &DogPatch) {
        if !patch.name.is_empty() {
            self.name.clone_from(&patch.name);
        }
        if !patch.breed.is_empty() {
            self.breed.clone_from(&patch.breed);
        }
        if !patch.owner.is_empty() {
            self.owner.clone_from(&patch.owner);
        }
    }
}

impl DogPatch {
    /// Reject a patch whose body id names a different record than the URL.
    ///
    /// An empty body id is always accepted.
    pub fn check_target(&self, path_id: &str) -> Result<(), CoreError> {
        if !self.id.is_empty() && self.id != path_id {
            return Err(CoreError::IdMismatch {
                path_id: path_id.to_string(),
                body_id: self.id.clone(),
            });
        }
        Ok(())
    }
}

/// The records the store starts with.
pub fn seed_dogs() -> Vec<Dog> {
    vec![
        Dog::new("10000", "San", "Jack Russle", "Ori"),
        Dog::new("10001", "Star", "Border Collie", "Itai"),
        Dog::new("10002", "Murray", "Mixed", "Uria"),
        Dog::new("10003", "Chuchu", "Mixed", "Shira"),
    ]
}
