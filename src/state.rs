//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the read-only phrase board and the one live selection session.
//! Handlers take the session lock for the whole of a transition so
//! concurrent clicks are applied one at a time.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::board::PhraseBoard;
use crate::session::Session;

/// Clone is required by Axum; both fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<PhraseBoard>,
    pub session: Arc<RwLock<Session>>,
}

impl AppState {
    #[must_use]
    pub fn new(board: PhraseBoard) -> Self {
        Self { board: Arc::new(board), session: Arc::new(RwLock::new(Session::new())) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
