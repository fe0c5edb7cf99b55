//! Selection session: the state machine behind the single screen.
//!
//! DESIGN
//! ======
//! A session moves through three states:
//!
//! ```text
//! Idle ──choose_category──▶ CategorySelected ──choose_phrase──▶ PhraseDisplayed
//!   ▲                                                                  │
//!   └──────────────────────── home / reset ◀───────────────────────────┘
//! ```
//!
//! Phrases can also be chosen directly from search, pins, favorites or
//! history, in which case the phrase's own category becomes the context.
//! Every successful transition pushes the previous state onto a bounded back
//! stack. History, favorites and pins are session-private memory; none of
//! it outlives `reset`.
//!
//! ERROR HANDLING
//! ==============
//! Unknown ids leave the state untouched and record a neutral notice for the
//! screen. The error is still returned so callers can log or map it.

use std::collections::{BTreeSet, VecDeque};

use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::board::{BoardError, PhraseBoard};
use crate::catalog::{Category, Phrase};
use crate::error::{ErrorCode, UNAVAILABLE_NOTICE};

/// Back-stack depth; older entries are dropped.
pub const NAV_LIMIT: usize = 50;
/// History length; older entries are dropped.
pub const HISTORY_LIMIT: usize = 50;
/// Maximum number of pinned favorites.
pub const PIN_LIMIT: usize = 5;

// =============================================================================
// SELECTION
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    Idle,
    CategorySelected { category_id: String },
    PhraseDisplayed { category_id: String, phrase_id: String },
}

impl Selection {
    /// Category in context, if any.
    #[must_use]
    pub fn category_id(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::CategorySelected { category_id } | Self::PhraseDisplayed { category_id, .. } => {
                Some(category_id.as_str())
            }
        }
    }

    #[must_use]
    pub fn phrase_id(&self) -> Option<&str> {
        match self {
            Self::PhraseDisplayed { phrase_id, .. } => Some(phrase_id.as_str()),
            _ => None,
        }
    }
}

// =============================================================================
// SESSION
// =============================================================================

#[derive(Debug)]
pub struct Session {
    id: Uuid,
    selection: Selection,
    fullscreen: bool,
    nav: VecDeque<Selection>,
    /// Displayed phrase texts, oldest first.
    history: VecDeque<String>,
    /// Favorited phrase texts.
    favorites: BTreeSet<String>,
    notice: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            selection: Selection::Idle,
            fullscreen: false,
            nav: VecDeque::new(),
            history: VecDeque::new(),
            favorites: BTreeSet::new(),
            notice: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Last user-visible message, cleared by the next successful transition.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    // -------------------------------------------------------------------------
    // transitions
    // -------------------------------------------------------------------------

    /// Narrow the screen to one category's phrases.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CategoryNotFound`]; the selection is unchanged.
    pub fn choose_category<'b>(&mut self, board: &'b PhraseBoard, category_id: &str) -> Result<&'b Category, BoardError> {
        let category = board.category(category_id).map_err(|e| self.unavailable(e))?;
        self.go(Selection::CategorySelected { category_id: category.id.clone() });
        Ok(category)
    }

    /// Display a phrase. Its own category becomes the context.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PhraseNotFound`]; the selection is unchanged.
    pub fn choose_phrase<'b>(&mut self, board: &'b PhraseBoard, phrase_id: &str) -> Result<&'b Phrase, BoardError> {
        let phrase = board.select_phrase(phrase_id).map_err(|e| self.unavailable(e))?;
        self.display(phrase);
        Ok(phrase)
    }

    /// Display a random phrase from the whole catalog.
    pub fn another<'b, R: Rng + ?Sized>(&mut self, board: &'b PhraseBoard, rng: &mut R) -> Option<&'b Phrase> {
        let phrase = board.random_phrase(rng)?;
        self.display(phrase);
        Some(phrase)
    }

    /// Return to the start screen, keeping session memory.
    pub fn home(&mut self) {
        self.go(Selection::Idle);
    }

    /// Show only the enlarged phrase. No effect unless a phrase is displayed.
    pub fn show_fullscreen(&mut self) -> bool {
        if self.selection.phrase_id().is_none() {
            return false;
        }
        self.fullscreen = true;
        true
    }

    pub fn exit_fullscreen(&mut self) {
        self.fullscreen = false;
    }

    /// Leave fullscreen, or pop the back stack; an empty stack goes to Idle.
    pub fn back(&mut self) {
        self.notice = None;
        if self.fullscreen {
            self.fullscreen = false;
            return;
        }
        self.selection = self.nav.pop_back().unwrap_or_default();
    }

    /// Start a new session: fresh id, Idle, and no memory carried over.
    pub fn reset(&mut self) {
        let previous = self.id;
        let history = self.history_len();
        *self = Self::new();
        debug!(%previous, history, session_id = %self.id, "session reset");
    }

    fn go(&mut self, next: Selection) {
        let previous = std::mem::replace(&mut self.selection, next);
        self.nav.push_back(previous);
        if self.nav.len() > NAV_LIMIT {
            self.nav.pop_front();
        }
        self.fullscreen = false;
        self.notice = None;
    }

    fn display(&mut self, phrase: &Phrase) {
        self.go(Selection::PhraseDisplayed {
            category_id: phrase.category_id.clone(),
            phrase_id: phrase.id.clone(),
        });
        self.push_history(&phrase.text);
    }

    fn unavailable(&mut self, err: BoardError) -> BoardError {
        warn!(session_id = %self.id, code = err.error_code(), error = %err, "selection unavailable");
        self.notice = Some(UNAVAILABLE_NOTICE.to_owned());
        err
    }

    // -------------------------------------------------------------------------
    // history
    // -------------------------------------------------------------------------

    fn push_history(&mut self, text: &str) {
        if self.history.back().is_some_and(|last| last == text) {
            return;
        }
        self.history.push_back(text.to_owned());
        if self.history.len() > HISTORY_LIMIT {
            self.history.pop_front();
        }
    }

    /// Up to `n` most recent phrase texts, newest first.
    #[must_use]
    pub fn recent(&self, n: usize) -> Vec<&str> {
        self.history.iter().rev().take(n).map(String::as_str).collect()
    }

    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // -------------------------------------------------------------------------
    // favorites
    // -------------------------------------------------------------------------

    /// Flip a phrase in or out of favorites; returns whether it is now a favorite.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PhraseNotFound`]; favorites are unchanged.
    pub fn toggle_favorite(&mut self, board: &PhraseBoard, phrase_id: &str) -> Result<bool, BoardError> {
        let phrase = board.select_phrase(phrase_id).map_err(|e| self.unavailable(e))?;
        self.notice = None;
        if self.favorites.remove(&phrase.text) {
            Ok(false)
        } else {
            self.favorites.insert(phrase.text.clone());
            Ok(true)
        }
    }

    #[must_use]
    pub fn is_favorite(&self, text: &str) -> bool {
        self.favorites.contains(text)
    }

    /// Favorite texts, alphabetical.
    #[must_use]
    pub fn favorites(&self) -> Vec<&str> {
        self.favorites.iter().map(String::as_str).collect()
    }

    /// Up to [`PIN_LIMIT`] favorites: most recently used first, then the
    /// never-used ones in reverse alphabetical order.
    #[must_use]
    pub fn pinned(&self) -> Vec<&str> {
        let mut scored: Vec<(usize, &str)> = self
            .favorites
            .iter()
            .map(|fav| {
                let recency = self
                    .history
                    .iter()
                    .rev()
                    .position(|h| h == fav)
                    .map_or(0, |age| HISTORY_LIMIT + 1 - age);
                (recency, fav.as_str())
            })
            .collect();
        scored.sort_by(|a, b| b.cmp(a));
        scored.into_iter().take(PIN_LIMIT).map(|(_, fav)| fav).collect()
    }

    // -------------------------------------------------------------------------
    // snapshot
    // -------------------------------------------------------------------------

    /// Serializable view of the session, resolved against the board.
    #[must_use]
    pub fn snapshot(&self, board: &PhraseBoard) -> SessionSnapshot {
        let category = self.selection.category_id().and_then(|id| board.category(id).ok());
        let phrase = self.selection.phrase_id().and_then(|id| board.select_phrase(id).ok());
        SessionSnapshot {
            id: self.id,
            selection: self.selection.clone(),
            fullscreen: self.fullscreen,
            category_label: category.map(|c| c.label.clone()),
            phrase_text: phrase.map(|p| p.text.clone()),
            history: self.recent(HISTORY_LIMIT).into_iter().map(str::to_owned).collect(),
            favorites: self.favorites.iter().cloned().collect(),
            pinned: self.pinned().into_iter().map(str::to_owned).collect(),
            notice: self.notice.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub id: Uuid,
    pub selection: Selection,
    pub fullscreen: bool,
    pub category_label: Option<String>,
    pub phrase_text: Option<String>,
    /// Newest first.
    pub history: Vec<String>,
    pub favorites: Vec<String>,
    pub pinned: Vec<String>,
    pub notice: Option<String>,
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
