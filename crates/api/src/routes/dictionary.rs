//! Route definitions for the personal dictionary.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::dictionary;
use crate::state::AppState;

/// Routes mounted at `/dictionary`.
///
/// ```text
/// GET    /      -> list_entries
/// POST   /      -> create_entry
/// DELETE /{id}  -> delete_entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(dictionary::list_entries).post(dictionary::create_entry),
        )
        .route("/{id}", delete(dictionary::delete_entry))
}
