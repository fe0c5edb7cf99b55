//! Phrase catalog: categories, phrases, and their validated construction.
//!
//! DESIGN
//! ======
//! A catalog is built once at startup from a [`CatalogSource`] (the built-in
//! table or a YAML/JSON file) and never mutated afterwards. Shared phrases
//! are copied into every category at build time, so each [`Phrase`] value
//! belongs to exactly one category and carries its own id.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures abort startup. A catalog that loads is guaranteed
//! non-empty, with unique slug ids and no blank labels or phrases.

pub mod defaults;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("catalog parse failed: {0}")]
    Parse(String),
    #[error("unsupported catalog format: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),
    #[error("catalog has no categories")]
    Empty,
    #[error("category label must not be blank")]
    BlankLabel,
    #[error("invalid category id '{0}' (expected lowercase letters, digits and '-')")]
    InvalidId(String),
    #[error("duplicate category id: {0}")]
    DuplicateCategory(String),
    #[error("blank phrase in category {0}")]
    BlankPhrase(String),
    #[error("category {0} has no phrases")]
    NoPhrases(String),
    #[error("quick access refers to unknown category: {0}")]
    UnknownQuickAccess(String),
    #[error("safe default is not a catalog phrase: {0}")]
    UnknownSafeDefault(String),
}

impl ErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "E_CATALOG_IO",
            Self::Parse(_) => "E_CATALOG_PARSE",
            Self::UnsupportedFormat(_) => "E_CATALOG_FORMAT",
            Self::Empty
            | Self::BlankLabel
            | Self::InvalidId(_)
            | Self::DuplicateCategory(_)
            | Self::BlankPhrase(_)
            | Self::NoPhrases(_)
            | Self::UnknownQuickAccess(_)
            | Self::UnknownSafeDefault(_) => "E_CATALOG_INVALID",
        }
    }
}

// =============================================================================
// TYPES
// =============================================================================

/// Browsing group a category is listed under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Activities,
    Places,
    #[default]
    General,
}

impl Scope {
    pub const ALL: [Scope; 3] = [Scope::Activities, Scope::Places, Scope::General];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Activities => "Activities",
            Self::Places => "Places",
            Self::General => "General",
        }
    }
}

/// A single pre-authored sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phrase {
    /// `<category-id>.<position>`, unique across the catalog.
    pub id: String,
    pub category_id: String,
    pub text: String,
}

/// A themed group of phrases in authored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: String,
    pub label: String,
    pub scope: Scope,
    pub phrases: Vec<Phrase>,
}

/// Raw catalog as authored, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSource {
    #[serde(default)]
    pub shared: Vec<String>,
    #[serde(default)]
    pub quick_access: Vec<String>,
    /// Phrase text behind the "I'm stuck" button on category screens.
    #[serde(default)]
    pub safe_default: Option<String>,
    pub categories: Vec<CategorySource>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategorySource {
    #[serde(default)]
    pub id: Option<String>,
    pub label: String,
    #[serde(default)]
    pub scope: Scope,
    #[serde(default)]
    pub phrases: Vec<String>,
}

/// Validated, immutable catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    quick_access: Vec<String>,
    safe_default: Option<String>,
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

impl Catalog {
    /// The built-in authored table.
    ///
    /// # Errors
    ///
    /// Only if the built-in table itself is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::build(defaults::source())
    }

    /// Read and validate a catalog file. The format follows the extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
        let source = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => parse_yaml(&raw)?,
            Some("json") => parse_json(&raw)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };
        Self::build(source)
    }

    /// Validate a source and materialize shared phrases into each category.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found.
    pub fn build(source: CatalogSource) -> Result<Self, CatalogError> {
        if source.categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        let mut categories = Vec::with_capacity(source.categories.len());

        for raw in source.categories {
            let label = raw.label.trim().to_owned();
            if label.is_empty() {
                return Err(CatalogError::BlankLabel);
            }

            let id = match raw.id {
                Some(id) => id,
                None => slugify(&label),
            };
            if !is_valid_id(&id) {
                return Err(CatalogError::InvalidId(id));
            }
            if !seen.insert(id.clone()) {
                return Err(CatalogError::DuplicateCategory(id));
            }

            if raw.phrases.iter().chain(&source.shared).any(|p| p.trim().is_empty()) {
                return Err(CatalogError::BlankPhrase(id));
            }

            let texts = dedupe_keep_order(raw.phrases.iter().chain(&source.shared).map(String::as_str));
            if texts.is_empty() {
                return Err(CatalogError::NoPhrases(id));
            }

            let phrases = texts
                .into_iter()
                .enumerate()
                .map(|(position, text)| Phrase {
                    id: format!("{id}.{position}"),
                    category_id: id.clone(),
                    text: text.to_owned(),
                })
                .collect();

            categories.push(Category { id, label, scope: raw.scope, phrases });
        }

        if let Some(unknown) = source.quick_access.iter().find(|id| !seen.contains(id.as_str())) {
            return Err(CatalogError::UnknownQuickAccess(unknown.clone()));
        }

        if let Some(text) = &source.safe_default {
            let known = categories.iter().flat_map(|c| &c.phrases).any(|p| &p.text == text);
            if !known {
                return Err(CatalogError::UnknownSafeDefault(text.clone()));
            }
        }

        Ok(Self { categories, quick_access: source.quick_access, safe_default: source.safe_default })
    }

    /// All categories in authored order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Category ids offered as shortcuts on the start screen.
    #[must_use]
    pub fn quick_access(&self) -> &[String] {
        &self.quick_access
    }

    #[must_use]
    pub fn safe_default(&self) -> Option<&str> {
        self.safe_default.as_deref()
    }
}

fn parse_yaml(raw: &str) -> Result<CatalogSource, CatalogError> {
    serde_yaml::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))
}

fn parse_json(raw: &str) -> Result<CatalogSource, CatalogError> {
    serde_json::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))
}

// =============================================================================
// HELPERS
// =============================================================================

/// Derive a category id from its label: lowercase, non-alphanumeric runs
/// collapsed to a single `-`, no leading or trailing `-`.
#[must_use]
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_dash = false;
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !id.starts_with('-')
        && !id.ends_with('-')
}

/// Drop repeated texts, keeping the first occurrence of each.
pub(crate) fn dedupe_keep_order<'a>(items: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(*item)).collect()
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
