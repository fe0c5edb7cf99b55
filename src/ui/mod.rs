//! Server-rendered screen.
//!
//! DESIGN
//! ======
//! Each request resolves the session against the board into small owned view
//! models, then renders leptos components to a string. There is no client
//! bundle and no hydration: every action is a plain form `POST` and the
//! handler redirects back, so the next `GET` renders the new state.
//!
//! Star buttons carry a `return_to` field so toggling a favorite lands on the
//! page it was clicked from (the favorites list, or the start screen with its
//! search query) instead of always resetting to `/`.

pub mod components;
pub mod pages;

use leptos::prelude::*;

use crate::board::PhraseBoard;
use crate::catalog::{Category, Phrase, Scope};
use crate::search::SearchHit;
use crate::session::{Selection, Session};
use components::{Notice, TopNav};
use pages::{CategoryPage, FavoritesPage, FullscreenPage, IdlePage, PhrasePage, shell};

const TITLE: &str = "Quick Communication Support";

/// Number of history entries shown on the start screen.
const RECENT_SHOWN: usize = 6;

// =============================================================================
// VIEW MODELS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseItem {
    pub id: String,
    pub text: String,
    pub favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLink {
    pub id: String,
    pub label: String,
}

impl From<&Category> for CategoryLink {
    fn from(category: &Category) -> Self {
        Self { id: category.id.clone(), label: category.label.clone() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultItem {
    Category { id: String, caption: String },
    Phrase(PhraseItem),
}

#[derive(Debug, Clone)]
pub struct IdleModel {
    pub query: String,
    /// `None` when no query was submitted.
    pub results: Option<Vec<ResultItem>>,
    pub pinned: Vec<PhraseItem>,
    pub quick_access: Vec<CategoryLink>,
    /// Non-empty scopes, in display order.
    pub scopes: Vec<(&'static str, Vec<CategoryLink>)>,
    pub last_selected: Option<String>,
    pub recent: Vec<PhraseItem>,
    pub return_to: String,
}

#[derive(Debug, Clone)]
pub struct CategoryModel {
    pub heading: String,
    /// Phrase id behind the "I'm stuck" button.
    pub safe_default: Option<String>,
    pub phrases: Vec<PhraseItem>,
}

#[derive(Debug, Clone)]
pub struct PhraseModel {
    pub phrase: PhraseItem,
    pub more_from: Option<CategoryLink>,
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

/// The current screen for this session, with optional search results.
#[must_use]
pub fn screen(board: &PhraseBoard, session: &Session, query: Option<&str>) -> String {
    if session.is_fullscreen() {
        if let Some(phrase) = displayed_phrase(board, session) {
            let phrase = phrase_item(session, phrase);
            return render(TITLE, view! { <FullscreenPage phrase=phrase/> }.into_any());
        }
    }

    let page = match session.selection() {
        Selection::Idle => {
            let model = idle_model(board, session, query.unwrap_or_default());
            view! { <IdlePage model=model/> }.into_any()
        }
        Selection::CategorySelected { category_id } => match category_model(board, session, category_id) {
            Some(model) => view! { <CategoryPage model=model/> }.into_any(),
            None => view! { <p class="sub">"This category is unavailable. Please try again."</p> }.into_any(),
        },
        Selection::PhraseDisplayed { .. } => match displayed_phrase(board, session) {
            Some(phrase) => {
                let model = phrase_model(board, session, phrase);
                view! { <PhrasePage model=model/> }.into_any()
            }
            None => view! { <p class="sub">"No phrase selected yet. Go Home and pick one."</p> }.into_any(),
        },
    };

    let show_back = !matches!(session.selection(), Selection::Idle);
    let notice = session.notice().map(str::to_owned);
    render(
        TITLE,
        view! {
            <TopNav show_back=show_back/>
            <Notice text=notice/>
            {page}
        }
        .into_any(),
    )
}

/// Favorites list, alphabetical, each selectable.
#[must_use]
pub fn favorites_page(board: &PhraseBoard, session: &Session) -> String {
    let items = by_text(board, session, session.favorites());
    render("Favorites", view! { <FavoritesPage items=items/> }.into_any())
}

fn render(title: &str, body: AnyView) -> String {
    shell(title.to_owned(), body).to_html()
}

// =============================================================================
// MODEL BUILDERS
// =============================================================================

fn idle_model(board: &PhraseBoard, session: &Session, query: &str) -> IdleModel {
    let searching = !query.trim().is_empty();
    let results = searching.then(|| {
        board
            .search(query)
            .into_iter()
            .filter_map(|hit| result_item(board, session, hit))
            .collect()
    });
    let return_to = if searching { format!("/?q={}", urlencoding::encode(query)) } else { "/".to_owned() };

    let scopes = Scope::ALL
        .into_iter()
        .map(|scope| (scope.label(), board.categories_in(scope).map(CategoryLink::from).collect::<Vec<_>>()))
        .filter(|(_, links)| !links.is_empty())
        .collect();

    IdleModel {
        query: query.to_owned(),
        results,
        pinned: by_text(board, session, session.pinned()),
        quick_access: board.quick_access().map(CategoryLink::from).collect(),
        scopes,
        last_selected: session.recent(1).first().map(|text| (*text).to_owned()),
        recent: by_text(board, session, session.recent(RECENT_SHOWN)),
        return_to,
    }
}

fn category_model(board: &PhraseBoard, session: &Session, category_id: &str) -> Option<CategoryModel> {
    let category = board.category(category_id).ok()?;
    Some(CategoryModel {
        heading: format!("{} • {}", category.scope.label(), category.label),
        safe_default: board.safe_default_in(&category.id).map(|p| p.id.clone()),
        phrases: category.phrases.iter().map(|p| phrase_item(session, p)).collect(),
    })
}

fn phrase_model(board: &PhraseBoard, session: &Session, phrase: &Phrase) -> PhraseModel {
    PhraseModel {
        phrase: phrase_item(session, phrase),
        more_from: board.category(&phrase.category_id).ok().map(CategoryLink::from),
    }
}

fn result_item(board: &PhraseBoard, session: &Session, hit: SearchHit) -> Option<ResultItem> {
    match hit {
        SearchHit::Category { id, label, scope } => {
            Some(ResultItem::Category { id, caption: format!("Open: {} • {label}", scope.label()) })
        }
        SearchHit::Phrase { id, .. } => board.select_phrase(&id).ok().map(|p| ResultItem::Phrase(phrase_item(session, p))),
    }
}

fn phrase_item(session: &Session, phrase: &Phrase) -> PhraseItem {
    PhraseItem { id: phrase.id.clone(), text: phrase.text.clone(), favorite: session.is_favorite(&phrase.text) }
}

/// Resolve stored texts to phrases; texts no longer in the catalog are skipped.
fn by_text(board: &PhraseBoard, session: &Session, texts: Vec<&str>) -> Vec<PhraseItem> {
    texts
        .into_iter()
        .filter_map(|text| board.phrase_by_text(text))
        .map(|p| phrase_item(session, p))
        .collect()
}

fn displayed_phrase<'b>(board: &'b PhraseBoard, session: &Session) -> Option<&'b Phrase> {
    session.selection().phrase_id().and_then(|id| board.select_phrase(id).ok())
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
