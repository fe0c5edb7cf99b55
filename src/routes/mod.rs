//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the phrase board screen at `/`, its form actions,
//! a small read-only JSON API under `/api`, and a health check. There is no
//! static asset directory; styles are inlined by the page shell.

pub mod api;
pub mod screen;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(screen::show))
        .route("/favorites", get(screen::favorites))
        .route("/categories/{id}", post(screen::choose_category))
        .route("/phrases/{id}", post(screen::choose_phrase))
        .route("/favorites/{phrase_id}", post(screen::toggle_favorite))
        .route("/another", post(screen::another))
        .route("/fullscreen", post(screen::fullscreen))
        .route("/fullscreen/exit", post(screen::exit_fullscreen))
        .route("/home", post(screen::home))
        .route("/back", post(screen::back))
        .route("/reset", post(screen::reset))
        .route("/api/categories", get(api::list_categories))
        .route("/api/categories/{id}/phrases", get(api::category_phrases))
        .route("/api/phrases/{id}", get(api::get_phrase))
        .route("/api/search", get(api::search))
        .route("/api/session", get(api::session))
        .route("/healthz", get(healthz))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
