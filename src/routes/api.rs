//! JSON API: read-only views of the catalog and the live session.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::board::BoardError;
use crate::catalog::{Phrase, Scope};
use crate::error::ErrorCode;
use crate::search::SearchHit;
use crate::session::SessionSnapshot;
use crate::state::AppState;

/// Board lookup failure rendered as a JSON error body.
#[derive(Debug)]
pub struct ApiError(pub BoardError);

impl From<BoardError> for ApiError {
    fn from(err: BoardError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "code": self.0.error_code(),
            "message": self.0.to_string(),
            "retryable": self.0.retryable(),
        });
        (board_error_to_status(&self.0), Json(body)).into_response()
    }
}

pub(crate) fn board_error_to_status(err: &BoardError) -> StatusCode {
    match err {
        BoardError::CategoryNotFound(_) | BoardError::PhraseNotFound(_) => StatusCode::NOT_FOUND,
    }
}

#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub id: String,
    pub label: String,
    pub scope: Scope,
    pub phrase_count: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// `GET /api/categories`: all categories in authored order.
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<CategorySummary>> {
    Json(
        state
            .board
            .list_categories()
            .iter()
            .map(|c| CategorySummary {
                id: c.id.clone(),
                label: c.label.clone(),
                scope: c.scope,
                phrase_count: c.phrases.len(),
            })
            .collect(),
    )
}

/// `GET /api/categories/:id/phrases`: one category's phrases.
pub async fn category_phrases(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> Result<Json<Vec<Phrase>>, ApiError> {
    let phrases = state.board.select_category(&category_id)?;
    Ok(Json(phrases.to_vec()))
}

/// `GET /api/phrases/:id`: one phrase.
pub async fn get_phrase(State(state): State<AppState>, Path(phrase_id): Path<String>) -> Result<Json<Phrase>, ApiError> {
    let phrase = state.board.select_phrase(&phrase_id)?;
    Ok(Json(phrase.clone()))
}

/// `GET /api/search?q=`: ranked hits.
pub async fn search(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> Json<Vec<SearchHit>> {
    Json(state.board.search(&query.q))
}

/// `GET /api/session`: snapshot of the live session.
pub async fn session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    let session = state.session.read().await;
    Json(session.snapshot(&state.board))
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
