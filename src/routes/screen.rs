//! Screen routes: the HTML page and its one-click form actions.
//!
//! Every action takes the session write lock, applies one transition, and
//! answers `303 See Other` back to `/`, so a refresh never repeats a click.
//! Favorite toggles are the exception: they return to the local page named by
//! the form's `return_to` field.
//! Unknown ids are not request errors here: the session records a notice and
//! the redirect shows the unchanged screen with it.

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::response::{Html, Redirect};
use serde::Deserialize;
use tracing::info;

use crate::state::AppState;
use crate::ui;

#[derive(Debug, Default, Deserialize)]
pub struct ScreenQuery {
    pub q: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FavoriteForm {
    #[serde(default)]
    pub return_to: Option<String>,
}

/// `target` when it is a plain same-site path, otherwise `/`.
pub(crate) fn local_path(target: Option<&str>) -> &str {
    match target {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && path.bytes().all(|b| b.is_ascii_graphic() && b != b'\\') =>
        {
            path
        }
        _ => "/",
    }
}

/// `GET /`: render the current screen.
pub async fn show(State(state): State<AppState>, Query(query): Query<ScreenQuery>) -> Html<String> {
    let session = state.session.read().await;
    Html(ui::screen(&state.board, &session, query.q.as_deref()))
}

/// `GET /favorites`: list favorites.
pub async fn favorites(State(state): State<AppState>) -> Html<String> {
    let session = state.session.read().await;
    Html(ui::favorites_page(&state.board, &session))
}

/// `POST /categories/:id`: narrow to one category.
pub async fn choose_category(State(state): State<AppState>, Path(category_id): Path<String>) -> Redirect {
    let mut session = state.session.write().await;
    if let Ok(category) = session.choose_category(&state.board, &category_id) {
        info!(session_id = %session.id(), category = %category.id, "category selected");
    }
    Redirect::to("/")
}

/// `POST /phrases/:id`: display a phrase.
pub async fn choose_phrase(State(state): State<AppState>, Path(phrase_id): Path<String>) -> Redirect {
    let mut session = state.session.write().await;
    if let Ok(phrase) = session.choose_phrase(&state.board, &phrase_id) {
        info!(session_id = %session.id(), phrase = %phrase.id, "phrase displayed");
    }
    Redirect::to("/")
}

/// `POST /favorites/:phrase_id`: toggle a favorite and go back where it was clicked.
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(phrase_id): Path<String>,
    Form(form): Form<FavoriteForm>,
) -> Redirect {
    let mut session = state.session.write().await;
    if let Ok(favorite) = session.toggle_favorite(&state.board, &phrase_id) {
        info!(session_id = %session.id(), phrase = %phrase_id, favorite, "favorite toggled");
    }
    Redirect::to(local_path(form.return_to.as_deref()))
}

/// `POST /another`: display a random phrase.
pub async fn another(State(state): State<AppState>) -> Redirect {
    let mut session = state.session.write().await;
    let mut rng = rand::rng();
    if let Some(phrase) = session.another(&state.board, &mut rng) {
        info!(session_id = %session.id(), phrase = %phrase.id, "random phrase displayed");
    }
    Redirect::to("/")
}

/// `POST /fullscreen`
pub async fn fullscreen(State(state): State<AppState>) -> Redirect {
    state.session.write().await.show_fullscreen();
    Redirect::to("/")
}

/// `POST /fullscreen/exit`
pub async fn exit_fullscreen(State(state): State<AppState>) -> Redirect {
    state.session.write().await.exit_fullscreen();
    Redirect::to("/")
}

/// `POST /home`: back to the start screen, memory kept.
pub async fn home(State(state): State<AppState>) -> Redirect {
    state.session.write().await.home();
    Redirect::to("/")
}

/// `POST /back`
pub async fn back(State(state): State<AppState>) -> Redirect {
    state.session.write().await.back();
    Redirect::to("/")
}

/// `POST /reset`: end this session and start a fresh one.
pub async fn reset(State(state): State<AppState>) -> Redirect {
    let mut session = state.session.write().await;
    let ended = session.id();
    session.reset();
    info!(ended = %ended, session_id = %session.id(), "new session started");
    Redirect::to("/")
}

#[cfg(test)]
#[path = "screen_test.rs"]
mod tests;
