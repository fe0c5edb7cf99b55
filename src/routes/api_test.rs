use super::*;
use crate::state::test_helpers::test_app_state;

#[test]
fn board_error_to_status_maps_not_found() {
    assert_eq!(board_error_to_status(&BoardError::CategoryNotFound("x".into())), StatusCode::NOT_FOUND);
    assert_eq!(board_error_to_status(&BoardError::PhraseNotFound("x".into())), StatusCode::NOT_FOUND);
}

#[test]
fn api_error_response_is_404() {
    let response = ApiError(BoardError::CategoryNotFound("nonexistent".into())).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_categories_returns_summaries_in_order() {
    let state = test_app_state();
    let Json(categories) = list_categories(State(state)).await;
    let ids: Vec<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["clarification", "pause"]);
    assert_eq!(categories[0].phrase_count, 3);
    assert_eq!(categories[1].scope, Scope::Places);
}

#[tokio::test]
async fn category_phrases_returns_authored_list() {
    let state = test_app_state();
    let Json(phrases) = category_phrases(State(state), Path("clarification".into())).await.unwrap();
    let texts: Vec<&str> = phrases.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, ["Could you repeat that?", "Could you clarify?", "One moment, please."]);
}

#[tokio::test]
async fn category_phrases_unknown_is_not_found() {
    let state = test_app_state();
    let err = category_phrases(State(state), Path("nonexistent".into())).await.unwrap_err();
    assert_eq!(err.0, BoardError::CategoryNotFound("nonexistent".into()));
}

#[tokio::test]
async fn get_phrase_returns_exact_text() {
    let state = test_app_state();
    let Json(phrase) = get_phrase(State(state), Path("pause.0".into())).await.unwrap();
    assert_eq!(phrase.text, "I need a pause <now> & then.");
    assert_eq!(phrase.category_id, "pause");
}

#[tokio::test]
async fn get_phrase_unknown_is_not_found() {
    let state = test_app_state();
    let err = get_phrase(State(state), Path("pause.7".into())).await.unwrap_err();
    assert_eq!(err.0.error_code(), "E_PHRASE_NOT_FOUND");
}

#[tokio::test]
async fn search_returns_hits() {
    let state = test_app_state();
    let Json(hits) = search(State(state), Query(SearchQuery { q: "pause".into() })).await;
    assert!(matches!(&hits[0], SearchHit::Category { id, .. } if id == "pause"));
}

#[tokio::test]
async fn search_empty_query_returns_nothing() {
    let state = test_app_state();
    let Json(hits) = search(State(state), Query(SearchQuery::default())).await;
    assert!(hits.is_empty());
}

#[tokio::test]
async fn session_snapshot_reflects_selection() {
    let state = test_app_state();
    {
        let mut session = state.session.write().await;
        session.choose_phrase(&state.board, "clarification.1").unwrap();
    }
    let Json(snapshot) = session(State(state)).await;
    assert_eq!(snapshot.phrase_text.as_deref(), Some("Could you clarify?"));
    assert_eq!(snapshot.category_label.as_deref(), Some("Clarification"));
}
