//! Route definitions for translation history.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::history;
use crate::state::AppState;

/// Routes mounted at `/history`.
///
/// ```text
/// GET    /                -> list_history
/// DELETE /                -> clear_history
/// DELETE /{id}            -> delete_history_item
/// POST   /{id}/favorite   -> favorite_history_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(history::list_history).delete(history::clear_history),
        )
        .route("/{id}", delete(history::delete_history_item))
        .route("/{id}/favorite", post(history::favorite_history_item))
}
