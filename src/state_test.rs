use super::*;
use crate::session::Selection;

#[tokio::test]
async fn app_state_starts_with_idle_session() {
    let state = test_helpers::test_app_state();
    let session = state.session.read().await;
    assert_eq!(session.selection(), &Selection::Idle);
}

#[tokio::test]
async fn app_state_clones_share_session() {
    let state = test_helpers::test_app_state();
    let other = state.clone();
    {
        let mut session = state.session.write().await;
        session.choose_category(&state.board, "pause").unwrap();
    }
    let session = other.session.read().await;
    assert_eq!(session.selection().category_id(), Some("pause"));
}

#[test]
fn test_board_materializes_shared_phrase() {
    let board = test_helpers::test_board();
    let pause = board.select_category("pause").unwrap();
    assert_eq!(pause.len(), 2);
    assert_eq!(pause[1].text, "One moment, please.");
}
