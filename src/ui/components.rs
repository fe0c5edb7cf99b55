//! Small building blocks shared by the pages.
//!
//! Every clickable element is a one-button `POST` form so the screen works
//! without any client-side script.

use leptos::prelude::*;

use super::{CategoryLink, PhraseItem};

/// A single submit button posting to `path`.
#[component]
pub fn ActionButton(#[prop(into)] path: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <form method="post" action=path>
            <button type="submit">{label}</button>
        </form>
    }
}

/// Button that opens a category.
#[component]
pub fn CategoryButton(link: CategoryLink) -> impl IntoView {
    let path = format!("/categories/{}", link.id);
    view! { <ActionButton path=path label=link.label/> }
}

/// Star toggle. `return_to` is where the click should land afterwards.
#[component]
pub fn FavoriteButton(
    phrase_id: String,
    favorite: bool,
    #[prop(into)] return_to: String,
    #[prop(optional)] verbose: bool,
) -> impl IntoView {
    let path = format!("/favorites/{phrase_id}");
    let label = match (favorite, verbose) {
        (true, true) => "★ Favorited",
        (false, true) => "☆ Favorite",
        (true, false) => "★",
        (false, false) => "☆",
    };

    view! {
        <form method="post" action=path>
            <input type="hidden" name="return_to" value=return_to/>
            <button type="submit">{label}</button>
        </form>
    }
}

/// Selectable phrase with its star.
#[component]
pub fn PhraseRow(item: PhraseItem, #[prop(into)] return_to: String) -> impl IntoView {
    let PhraseItem { id, text, favorite } = item;
    let path = format!("/phrases/{id}");

    view! {
        <div class="row">
            <div class="pick">
                <ActionButton path=path label=text/>
            </div>
            <div class="star">
                <FavoriteButton phrase_id=id favorite=favorite return_to=return_to/>
            </div>
        </div>
    }
}

#[component]
pub fn TopNav(show_back: bool) -> impl IntoView {
    view! {
        <div class="nav">
            <ActionButton path="/home" label="🏠 Home"/>
            {show_back.then(|| view! { <ActionButton path="/back" label="⬅ Back"/> })}
            <a href="/favorites">
                <button type="button">"★ Favorites"</button>
            </a>
            <ActionButton path="/reset" label="New session"/>
        </div>
    }
}

/// Neutral status line, e.g. after an unavailable selection.
#[component]
pub fn Notice(text: Option<String>) -> impl IntoView {
    text.map(|text| view! { <div class="notice" role="status">{text}</div> })
}

/// The displayed phrase, enlarged.
#[component]
pub fn BigPhrase(text: String) -> impl IntoView {
    view! {
        <div class="big-phrase">
            <div class="phrase-text">{text}</div>
        </div>
    }
}
