//! Phrase board: lookups over the immutable catalog.
//!
//! DESIGN
//! ======
//! The board wraps a validated [`Catalog`] with id indexes so category and
//! phrase selection are plain table lookups. It holds no selection state;
//! that lives in [`crate::session::Session`]. Because the catalog never
//! changes after startup, the board is shared read-only behind an `Arc`.

use std::collections::{HashMap, HashSet};

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::catalog::{Catalog, Category, Phrase, Scope};
use crate::error::ErrorCode;
use crate::search::{self, SearchHit};

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("category not found: {0}")]
    CategoryNotFound(String),
    #[error("phrase not found: {0}")]
    PhraseNotFound(String),
}

impl ErrorCode for BoardError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CategoryNotFound(_) => "E_CATEGORY_NOT_FOUND",
            Self::PhraseNotFound(_) => "E_PHRASE_NOT_FOUND",
        }
    }
}

// =============================================================================
// BOARD
// =============================================================================

#[derive(Debug)]
pub struct PhraseBoard {
    catalog: Catalog,
    /// category id -> index into `catalog.categories()`.
    categories: HashMap<String, usize>,
    /// phrase id -> (category index, phrase index).
    phrases: HashMap<String, (usize, usize)>,
}

impl PhraseBoard {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let mut categories = HashMap::new();
        let mut phrases = HashMap::new();
        for (ci, category) in catalog.categories().iter().enumerate() {
            categories.insert(category.id.clone(), ci);
            for (pi, phrase) in category.phrases.iter().enumerate() {
                phrases.insert(phrase.id.clone(), (ci, pi));
            }
        }
        Self { catalog, categories, phrases }
    }

    /// All categories in authored order.
    #[must_use]
    pub fn list_categories(&self) -> &[Category] {
        self.catalog.categories()
    }

    /// Categories of one scope, in authored order.
    pub fn categories_in(&self, scope: Scope) -> impl Iterator<Item = &Category> {
        self.list_categories().iter().filter(move |c| c.scope == scope)
    }

    /// Look up a category by id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CategoryNotFound`] for an unknown id.
    pub fn category(&self, category_id: &str) -> Result<&Category, BoardError> {
        self.categories
            .get(category_id)
            .map(|&ci| &self.catalog.categories()[ci])
            .ok_or_else(|| BoardError::CategoryNotFound(category_id.to_owned()))
    }

    /// Phrases of a category, exactly as authored.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CategoryNotFound`] for an unknown id.
    pub fn select_category(&self, category_id: &str) -> Result<&[Phrase], BoardError> {
        self.category(category_id).map(|c| c.phrases.as_slice())
    }

    /// The phrase to display.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::PhraseNotFound`] for an unknown id.
    pub fn select_phrase(&self, phrase_id: &str) -> Result<&Phrase, BoardError> {
        self.phrases
            .get(phrase_id)
            .map(|&(ci, pi)| &self.catalog.categories()[ci].phrases[pi])
            .ok_or_else(|| BoardError::PhraseNotFound(phrase_id.to_owned()))
    }

    /// First phrase in catalog order carrying exactly this text.
    #[must_use]
    pub fn phrase_by_text(&self, text: &str) -> Option<&Phrase> {
        self.all_phrases().find(|p| p.text == text)
    }

    /// Categories shown as shortcuts on the start screen.
    pub fn quick_access(&self) -> impl Iterator<Item = &Category> {
        self.catalog
            .quick_access()
            .iter()
            .filter_map(|id| self.category(id).ok())
    }

    /// The "I'm stuck" phrase as listed under `category_id`, falling back to
    /// its first occurrence anywhere in the catalog.
    #[must_use]
    pub fn safe_default_in(&self, category_id: &str) -> Option<&Phrase> {
        let text = self.catalog.safe_default()?;
        self.category(category_id)
            .ok()
            .and_then(|c| c.phrases.iter().find(|p| p.text == text))
            .or_else(|| self.phrase_by_text(text))
    }

    /// Every phrase, in catalog order.
    pub fn all_phrases(&self) -> impl Iterator<Item = &Phrase> {
        self.list_categories().iter().flat_map(|c| c.phrases.iter())
    }

    /// Every distinct phrase text once, first occurrence wins.
    #[must_use]
    pub fn distinct_phrases(&self) -> Vec<&Phrase> {
        let mut seen = HashSet::new();
        self.all_phrases().filter(|p| seen.insert(p.text.as_str())).collect()
    }

    /// A uniformly chosen distinct phrase.
    pub fn random_phrase<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Phrase> {
        self.distinct_phrases().choose(rng).copied()
    }

    /// Ranked keyword search over distinct phrases and category labels.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let categories = search::SCOPE_ORDER.into_iter().flat_map(|scope| self.categories_in(scope));
        search::rank(query, self.distinct_phrases(), categories)
    }
}

#[cfg(test)]
#[path = "board_test.rs"]
mod tests;
