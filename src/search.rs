//! Keyword search over phrases and category labels.
//!
//! Scoring is token overlap, plus a boost when the whole
//! query appears inside the text and a larger one for an exact match.
//! Category labels get an extra boost so typing a place or activity name
//! surfaces the category above individual phrases.

use serde::Serialize;

use crate::catalog::{Category, Phrase, Scope};

/// Maximum number of hits returned.
pub const MAX_HITS: usize = 12;

/// Order in which category labels are offered to [`rank`]; equal scores keep it.
pub const SCOPE_ORDER: [Scope; 3] = [Scope::Places, Scope::Activities, Scope::General];

const SUBSTRING_BOOST: u32 = 2;
const EXACT_BOOST: u32 = 4;
const CATEGORY_BOOST: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SearchHit {
    Phrase { id: String, text: String },
    Category { id: String, label: String, scope: Scope },
}

/// Lowercase, trim, and collapse internal whitespace.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Maximal runs of `[a-z0-9']` in the normalized text.
#[must_use]
pub fn tokens(text: &str) -> Vec<String> {
    normalize(text)
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '\''))
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Relevance of `text` for `query`; zero means no match.
#[must_use]
pub fn score_text(query: &str, text: &str) -> u32 {
    let q = normalize(query);
    if q.is_empty() {
        return 0;
    }
    let t = normalize(text);

    let text_tokens = tokens(&t);
    let mut query_tokens = tokens(&q);
    query_tokens.sort_unstable();
    query_tokens.dedup();
    let overlap = query_tokens.iter().filter(|tok| text_tokens.contains(tok)).count();

    let mut score = u32::try_from(overlap).unwrap_or(u32::MAX);
    if t.contains(&q) {
        score += SUBSTRING_BOOST;
    }
    if t == q {
        score += EXACT_BOOST;
    }
    score
}

/// Rank phrases and categories for `query`, best first, at most [`MAX_HITS`].
///
/// Phrases are expected to be unique by text already. Ties keep input order,
/// phrases before categories.
#[must_use]
pub fn rank<'a>(
    query: &str,
    phrases: impl IntoIterator<Item = &'a Phrase>,
    categories: impl IntoIterator<Item = &'a Category>,
) -> Vec<SearchHit> {
    let phrase_hits = phrases.into_iter().filter_map(|p| {
        let score = score_text(query, &p.text);
        (score > 0).then(|| (score, SearchHit::Phrase { id: p.id.clone(), text: p.text.clone() }))
    });
    let category_hits = categories.into_iter().filter_map(|c| {
        let score = score_text(query, &c.label);
        (score > 0).then(|| {
            (
                score + CATEGORY_BOOST,
                SearchHit::Category { id: c.id.clone(), label: c.label.clone(), scope: c.scope },
            )
        })
    });

    let mut hits: Vec<(u32, SearchHit)> = phrase_hits.chain(category_hits).collect();
    hits.sort_by(|a, b| b.0.cmp(&a.0));
    hits.into_iter().take(MAX_HITS).map(|(_, hit)| hit).collect()
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
