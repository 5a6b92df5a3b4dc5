//! Route definitions for favorites.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::favorites;
use crate::state::AppState;

/// Routes mounted at `/favorites`.
///
/// ```text
/// GET    /      -> list_favorites
/// POST   /      -> create_favorite
/// DELETE /{id}  -> delete_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(favorites::list_favorites).post(favorites::create_favorite),
        )
        .route("/{id}", delete(favorites::delete_favorite))
}
