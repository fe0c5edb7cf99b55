use super::*;
use crate::session::Selection;
use crate::state::test_helpers::test_app_state;
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::IntoResponse;

fn assert_redirects_home(redirect: Redirect) {
    let response = redirect.into_response();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/");
}

fn no_query() -> Query<ScreenQuery> {
    Query(ScreenQuery::default())
}

fn from_page(path: &str) -> Form<FavoriteForm> {
    Form(FavoriteForm { return_to: Some(path.to_owned()) })
}

fn location(redirect: Redirect) -> String {
    let response = redirect.into_response();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response.headers().get(LOCATION).unwrap().to_str().unwrap().to_owned()
}

#[tokio::test]
async fn show_renders_idle_screen() {
    let state = test_app_state();
    let Html(html) = show(State(state), no_query()).await;
    assert!(html.contains("Quick Communication Support"));
    assert!(html.contains(r#"action="/categories/pause""#));
}

#[tokio::test]
async fn show_passes_search_query() {
    let state = test_app_state();
    let Html(html) = show(State(state), Query(ScreenQuery { q: Some("clarify".into()) })).await;
    assert!(html.contains(">Results<"));
}

#[tokio::test]
async fn category_then_phrase_flow() {
    let state = test_app_state();

    assert_redirects_home(choose_category(State(state.clone()), Path("clarification".into())).await);
    assert_redirects_home(choose_phrase(State(state.clone()), Path("clarification.0".into())).await);

    let Html(html) = show(State(state.clone()), no_query()).await;
    assert!(html.contains(r#"class="phrase-text""#));
    assert!(html.contains("Could you repeat that?"));
    assert_eq!(state.session.read().await.recent(1), ["Could you repeat that?"]);
}

#[tokio::test]
async fn unknown_category_stays_on_category_list() {
    let state = test_app_state();

    assert_redirects_home(choose_category(State(state.clone()), Path("nonexistent".into())).await);

    let session = state.session.read().await;
    assert_eq!(session.selection(), &Selection::Idle);
    assert!(session.notice().is_some());
}

#[tokio::test]
async fn unknown_phrase_keeps_screen() {
    let state = test_app_state();
    let _ = choose_category(State(state.clone()), Path("pause".into())).await;
    let _ = choose_phrase(State(state.clone()), Path("pause.99".into())).await;

    let session = state.session.read().await;
    assert_eq!(session.selection(), &Selection::CategorySelected { category_id: "pause".into() });
}

#[tokio::test]
async fn toggle_favorite_then_list() {
    let state = test_app_state();
    let star = || Form(FavoriteForm::default());
    assert_redirects_home(toggle_favorite(State(state.clone()), Path("clarification.1".into()), star()).await);

    let Html(html) = favorites(State(state.clone())).await;
    assert!(html.contains("Could you clarify?"));

    let _ = toggle_favorite(State(state.clone()), Path("clarification.1".into()), star()).await;
    let Html(html) = favorites(State(state)).await;
    assert!(html.contains("No favorites yet."));
}

#[tokio::test]
async fn toggle_favorite_on_favorites_page_stays_there() {
    let state = test_app_state();
    let redirect = toggle_favorite(State(state.clone()), Path("pause.0".into()), from_page("/favorites")).await;
    assert_eq!(location(redirect), "/favorites");
    assert!(state.session.read().await.is_favorite("I need a pause <now> & then."));
}

#[tokio::test]
async fn toggle_favorite_from_search_keeps_query() {
    let state = test_app_state();
    let redirect =
        toggle_favorite(State(state.clone()), Path("clarification.1".into()), from_page("/?q=could%20clarify")).await;
    assert_eq!(location(redirect), "/?q=could%20clarify");

    let Html(html) = show(State(state), Query(ScreenQuery { q: Some("could clarify".into()) })).await;
    assert!(html.contains(">Results<"));
    assert!(html.contains(">★<"));
}

#[tokio::test]
async fn toggle_favorite_ignores_offsite_return_to() {
    let state = test_app_state();
    for target in ["https://example.com/", "//example.com/", "favorites", "/\\example.com"] {
        let redirect = toggle_favorite(State(state.clone()), Path("pause.0".into()), from_page(target)).await;
        assert_eq!(location(redirect), "/", "{target}");
    }
}

#[test]
fn local_path_accepts_plain_paths_only() {
    assert_eq!(local_path(Some("/favorites")), "/favorites");
    assert_eq!(local_path(Some("/?q=gym")), "/?q=gym");
    assert_eq!(local_path(Some("/?q=a b")), "/");
    assert_eq!(local_path(Some("//evil")), "/");
    assert_eq!(local_path(None), "/");
}

#[tokio::test]
async fn another_displays_something() {
    let state = test_app_state();
    assert_redirects_home(another(State(state.clone())).await);
    assert!(state.session.read().await.selection().phrase_id().is_some());
}

#[tokio::test]
async fn fullscreen_round_trip() {
    let state = test_app_state();
    let _ = choose_phrase(State(state.clone()), Path("pause.0".into())).await;

    assert_redirects_home(fullscreen(State(state.clone())).await);
    assert!(state.session.read().await.is_fullscreen());

    assert_redirects_home(exit_fullscreen(State(state.clone())).await);
    assert!(!state.session.read().await.is_fullscreen());
}

#[tokio::test]
async fn home_and_back() {
    let state = test_app_state();
    let _ = choose_category(State(state.clone()), Path("pause".into())).await;

    assert_redirects_home(home(State(state.clone())).await);
    assert_eq!(state.session.read().await.selection(), &Selection::Idle);

    assert_redirects_home(back(State(state.clone())).await);
    assert_eq!(
        state.session.read().await.selection(),
        &Selection::CategorySelected { category_id: "pause".into() }
    );
}

#[tokio::test]
async fn reset_starts_new_idle_session() {
    let state = test_app_state();
    let before = state.session.read().await.id();
    let _ = choose_phrase(State(state.clone()), Path("pause.0".into())).await;

    assert_redirects_home(reset(State(state.clone())).await);

    let session = state.session.read().await;
    assert_ne!(session.id(), before);
    assert_eq!(session.selection(), &Selection::Idle);
    assert_eq!(session.history_len(), 0);
}
