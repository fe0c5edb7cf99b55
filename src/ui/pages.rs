//! Full-screen views, one per selection state, plus the favorites list.

use leptos::prelude::*;

use super::components::{ActionButton, BigPhrase, CategoryButton, FavoriteButton, PhraseRow, TopNav};
use super::{CategoryModel, IdleModel, PhraseItem, PhraseModel, ResultItem};

const STYLE: &str = r"
body { font-family: system-ui, sans-serif; background: #14161a; color: #f2f2f2; margin: 0; }
main { max-width: 900px; margin: 0 auto; padding: 2.2rem 1rem 2rem; }
h1 { font-size: 2.15rem; font-weight: 900; margin: 0.2rem 0 0.4rem; }
h2 { font-size: 1.15rem; font-weight: 900; margin: 16px 0 10px; }
.sub { opacity: 0.78; margin-bottom: 1rem; }
form { display: inline; margin: 0; }
button { border-radius: 14px; padding: 0.95rem 1rem; border: 1px solid #3a3f48; background: #22262d; color: inherit; font-size: 1rem; cursor: pointer; }
.nav { display: flex; gap: 0.5rem; margin-bottom: 0.75rem; }
.grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0.5rem; }
.quick { display: flex; gap: 0.5rem; flex-wrap: wrap; }
.quick button { border-radius: 999px; font-weight: 900; min-width: 7rem; }
.row { display: flex; gap: 0.5rem; margin-bottom: 0.5rem; }
.row .pick { flex: 7; }
.row .pick button { width: 100%; text-align: left; }
.row .star button { padding: 0.95rem 0.8rem; }
.notice { padding: 0.8rem 1rem; border-radius: 12px; background: #3b2f1a; margin-bottom: 1rem; }
.big-phrase { margin-top: 18px; padding: 64px 38px; border-radius: 22px; border: 1px solid rgba(255,255,255,0.14);
  background: rgba(255,255,255,0.04); min-height: 290px; display: flex; align-items: center; justify-content: center; text-align: center; }
.big-phrase .phrase-text { font-size: 3.05rem; font-weight: 900; line-height: 1.1; }
.fullscreen .big-phrase { min-height: 72vh; }
.fullscreen .phrase-text { font-size: 3.6rem; }
.actions { display: flex; gap: 0.5rem; margin-top: 1rem; }
.actions button { padding: 0.52rem 0.7rem; border-radius: 12px; font-size: 0.95rem; }
";

/// HTML document around a page body.
pub fn shell(title: String, body: AnyView) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                <style inner_html=STYLE></style>
            </head>
            <body>
                <main>{body}</main>
            </body>
        </html>
    }
}

// =============================================================================
// START SCREEN
// =============================================================================

/// Start screen: search, pins, quick access, category grids and recent phrases.
#[component]
pub fn IdlePage(model: IdleModel) -> impl IntoView {
    let IdleModel { query, results, pinned, quick_access, scopes, last_selected, recent, return_to } = model;

    let results = results.map(|hits| {
        let return_to = return_to.clone();
        view! { <SearchResults hits=hits return_to=return_to/> }
    });

    let pinned = (!pinned.is_empty()).then(|| {
        view! {
            <h2>"Pinned"</h2>
            {pinned
                .into_iter()
                .map(|item| view! { <PhraseRow item=item return_to=return_to.clone()/> })
                .collect_view()}
        }
    });

    let quick_access = (!quick_access.is_empty()).then(|| {
        view! {
            <h2>"Quick access"</h2>
            <div class="quick">
                {quick_access.into_iter().map(|link| view! { <CategoryButton link=link/> }).collect_view()}
            </div>
        }
    });

    let scopes = scopes
        .into_iter()
        .map(|(label, links)| {
            view! {
                <h2>{label}</h2>
                <div class="grid">
                    {links.into_iter().map(|link| view! { <CategoryButton link=link/> }).collect_view()}
                </div>
            }
        })
        .collect_view();

    let last_selected = last_selected.map(|text| {
        view! {
            <h2>"Last selected"</h2>
            <p class="sub">{text}</p>
        }
    });

    let recent = (!recent.is_empty()).then(|| {
        view! {
            <h2>"Recent"</h2>
            {recent
                .into_iter()
                .map(|item| view! { <PhraseRow item=item return_to=return_to.clone()/> })
                .collect_view()}
        }
    });

    view! {
        <form method="get" action="/" role="search">
            <input
                type="search"
                name="q"
                value=query
                placeholder="Type keywords… (e.g., gym, class, lecture, stuck)"
            />
            " "
            <button type="submit">"Search"</button>
        </form>
        {results}
        <h1>"Quick Communication Support"</h1>
        <p class="sub">"Discreet help when words get stuck."</p>
        {pinned}
        {quick_access}
        {scopes}
        {last_selected}
        {recent}
    }
}

#[component]
fn SearchResults(hits: Vec<ResultItem>, return_to: String) -> impl IntoView {
    let body = if hits.is_empty() {
        view! { <p class="sub">"No matches. Try fewer words."</p> }.into_any()
    } else {
        hits.into_iter()
            .map(|hit| match hit {
                ResultItem::Category { id, caption } => {
                    let path = format!("/categories/{id}");
                    view! {
                        <ActionButton path=path label=caption/>
                        <br/>
                    }
                    .into_any()
                }
                ResultItem::Phrase(item) => view! { <PhraseRow item=item return_to=return_to.clone()/> }.into_any(),
            })
            .collect_view()
            .into_any()
    };

    view! {
        <h2>"Results"</h2>
        {body}
    }
}

// =============================================================================
// CATEGORY / PHRASE
// =============================================================================

/// One category's phrases, with the "I'm stuck" shortcut on top.
#[component]
pub fn CategoryPage(model: CategoryModel) -> impl IntoView {
    let CategoryModel { heading, safe_default, phrases } = model;

    let safe_default = safe_default.map(|phrase_id| {
        let path = format!("/phrases/{phrase_id}");
        view! {
            <h2>"Quick button"</h2>
            <ActionButton path=path label="🧠 I’m stuck (safe default)"/>
        }
    });

    view! {
        <h1>{heading}</h1>
        {safe_default}
        <h2>"Tap a phrase"</h2>
        {phrases.into_iter().map(|item| view! { <PhraseRow item=item return_to="/"/> }).collect_view()}
    }
}

#[component]
pub fn PhrasePage(model: PhraseModel) -> impl IntoView {
    let PhraseModel { phrase: PhraseItem { id, text, favorite }, more_from } = model;

    let more_from = more_from.map(|link| {
        let path = format!("/categories/{}", link.id);
        let label = format!("More from {}", link.label);
        view! { <ActionButton path=path label=label/> }
    });

    view! {
        <BigPhrase text=text/>
        <div class="actions">
            <FavoriteButton phrase_id=id favorite=favorite return_to="/" verbose=true/>
            <ActionButton path="/another" label="🔄 Another"/>
            <ActionButton path="/fullscreen" label="⛶ Full-screen"/>
            {more_from}
        </div>
    }
}

/// Only the enlarged phrase and its three actions; no navigation.
#[component]
pub fn FullscreenPage(phrase: PhraseItem) -> impl IntoView {
    let PhraseItem { id, text, favorite } = phrase;

    view! {
        <div class="fullscreen">
            <BigPhrase text=text/>
            <div class="actions">
                <ActionButton path="/fullscreen/exit" label="Exit full-screen"/>
                <FavoriteButton phrase_id=id favorite=favorite return_to="/" verbose=true/>
                <ActionButton path="/another" label="🔄 Another"/>
            </div>
        </div>
    }
}

// =============================================================================
// FAVORITES
// =============================================================================

/// Favorites, alphabetical; starring here stays on this page.
#[component]
pub fn FavoritesPage(items: Vec<PhraseItem>) -> impl IntoView {
    let body = if items.is_empty() {
        view! { <p class="sub">"No favorites yet. Tap ☆ next to a phrase to save it."</p> }.into_any()
    } else {
        items
            .into_iter()
            .map(|item| view! { <PhraseRow item=item return_to="/favorites"/> })
            .collect_view()
            .into_any()
    };

    view! {
        <TopNav show_back=true/>
        <h1>"Favorites"</h1>
        {body}
    }
}
