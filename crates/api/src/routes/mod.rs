pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/dogs` route tree.
///
/// ```text
/// /dogs          list (GET), create (POST)
/// /dogs/{id}     get (GET), merge update (PATCH), delete (DELETE)
/// ```
pub fn dog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/dogs",
            get(handlers::dog::list_dogs).post(handlers::dog::create_dog),
        )
        .route(
            "/dogs/{id}",
            get(handlers::dog::get_dog)
                .patch(handlers::dog::update_dog)
                .delete(handlers::dog::delete_dog),
        )
}
