//! Handlers for the `/dogs` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use kennel_core::dog::{Dog, DogPatch};
use kennel_core::error::CoreError;
use kennel_db::DogRepo;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::response::PrettyJson;
use crate::state::AppState;

/// GET /dogs
///
/// List every dog in stored order.
pub async fn list_dogs(State(state): State<AppState>) -> PrettyJson<Vec<Dog>> {
    let dogs = DogRepo::list(&state.store).await;
    tracing::debug!(count = dogs.len(), "Listed dogs");
    PrettyJson(dogs)
}

/// GET /dogs/{id}
pub async fn get_dog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<PrettyJson<Dog>> {
    let dog = DogRepo::find_by_id(&state.store, &id)
        .await
        .ok_or_else(|| CoreError::not_found(&id))?;
    Ok(PrettyJson(dog))
}

/// POST /dogs
///
/// Create a dog. `id` and `name` are required; returns 201 with the stored
/// record.
pub async fn create_dog(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<Dog>,
) -> AppResult<(StatusCode, PrettyJson<Dog>)> {
    input.validate_new()?;
    let dog = DogRepo::create(&state.store, input).await?;

    tracing::info!(dog_id = %dog.id, name = %dog.name, "Dog created");

    Ok((StatusCode::CREATED, PrettyJson(dog)))
}

/// PATCH /dogs/{id}
///
/// Merge the non-empty fields of the body into the dog. A body `id` that
/// differs from the URL is refused with 403 before anything is touched.
pub async fn update_dog(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<DogPatch>,
) -> AppResult<PrettyJson<Dog>> {
    patch.check_target(&id)?;

    let dog = DogRepo::update(&state.store, &id, &patch)
        .await
        .ok_or_else(|| CoreError::not_found(&id))?;

    tracing::info!(dog_id = %id, "Dog updated");

    Ok(PrettyJson(dog))
}

/// DELETE /dogs/{id}
///
/// Remove the dog. Responds 200 with an empty JSON string.
pub async fn delete_dog(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<PrettyJson<&'static str>> {
    if DogRepo::delete(&state.store, &id).await {
        tracing::info!(dog_id = %id, "Dog deleted");
        Ok(PrettyJson(""))
    } else {
        Err(CoreError::not_found(&id).into())
    }
}
