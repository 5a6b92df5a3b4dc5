pub mod dictionary;
pub mod favorites;
pub mod health;
pub mod history;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /languages                    language catalogue (public)
/// /tones                        tone catalogue (public)
///
/// /translate                    translate + suggest, saves history (POST)
/// /speech                       text-to-speech (POST)
/// /grammar                      grammar check (POST)
///
/// /history                      list, clear
/// /history/{id}                 delete
/// /history/{id}/favorite        copy into favorites (POST)
///
/// /favorites                    list, create
/// /favorites/{id}               delete
///
/// /dictionary                   list, create
/// /dictionary/{id}              delete
///
/// /settings                     get, merge-update (PUT)
/// /statistics                   usage statistics
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Public catalogues.
        .route("/languages", get(handlers::catalog::list_languages))
        .route("/tones", get(handlers::catalog::list_tones))
        // Generative operations.
        .route("/translate", post(handlers::translation::translate))
        .route("/speech", post(handlers::translation::synthesize_speech))
        .route("/grammar", post(handlers::translation::check_grammar))
        // Per-user collections.
        .nest("/history", history::router())
        .nest("/favorites", favorites::router())
        .nest("/dictionary", dictionary::router())
        .route(
            "/settings",
            get(handlers::settings::get_settings).put(handlers::settings::update_settings),
        )
        .route("/statistics", get(handlers::statistics::get_statistics))
}
