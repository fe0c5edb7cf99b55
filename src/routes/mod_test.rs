use super::*;
use crate::state::test_helpers::test_app_state;

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn app_router_builds_without_route_conflicts() {
    let _router = app(test_app_state());
}
