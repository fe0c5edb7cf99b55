//! Built-in authored phrase table.
//!
//! Used whenever `PHRASEBOARD_CATALOG` is not set. Texts are kept exactly as
//! authored for the study sessions.

use super::{CatalogSource, CategorySource, Scope};

/// Appended to every category, after its own phrases.
const SHARED_PHRASES: &[&str] = &[
    "Can I have a moment, please?",
    "I know what I mean — I just need a second.",
    "Please give me a moment to organise my words.",
    "The word is on the tip of my tongue.",
    "I’m stuck — can I try again in a moment?",
    "Could you repeat the question, please?",
    "Can you say that more slowly?",
    "Sorry — my brain froze for a second.",
    "Let me restart that sentence.",
];

const ACTIVITIES: &[(&str, &[&str])] = &[
    (
        "Presentation",
        &[
            "Let me restart that sentence.",
            "I’m nervous, but I understand the answer.",
            "I want to answer — I just need a moment.",
            "Can I quickly rephrase that?",
            "One second — I’m collecting my thoughts.",
        ],
    ),
    (
        "Lecture",
        &[
            "Could you repeat that last part, please?",
            "Can you say that more slowly?",
            "I’m following — give me a second to write it down.",
            "Can I ask a quick clarification?",
        ],
    ),
    (
        "Exam",
        &[
            "I understand — can I restate it in my own words?",
            "I know the answer — I just need a second.",
            "Can I have a moment to organise my words?",
            "Sorry — I’m stuck for a second. Let me try again.",
        ],
    ),
    (
        "Games",
        &[
            "Wait — my tongue is lagging 😂",
            "Give me a second, I’ll say it.",
            "I know what I want to say — one sec!",
            "Hold on — let me restart.",
        ],
    ),
    (
        "Friends",
        &[
            "Bro my tongue is protesting 😭",
            "Waittt — I’ll say it again 😂",
            "I swear I know the word… give me a sec 😅",
            "Let me restart before you roast me 😭",
            "My brain froze — not me!",
        ],
    ),
];

const PLACES: &[(&str, &[&str])] = &[
    (
        "Class",
        &[
            "Can I have a moment, please?",
            "I know the answer — I just need a second.",
            "Sorry — I’m stuck for a second. Let me try again.",
            "Can you repeat the question, please?",
        ],
    ),
    (
        "Library",
        &[
            "Sorry — can you say that more slowly?",
            "One second — I’m thinking.",
            "Can I rephrase that?",
        ],
    ),
    ("Hall", &["I’m stuck — can I try again in a moment?", "Give me a moment to organise my words."]),
    ("Gym", &["Wait — let me restart 😅", "One sec — I’ll say it."]),
    ("School Gate", &["Sorry — my brain froze for a second.", "Can I have a moment, please?"]),
    ("Basketball Court", &["Wait — my tongue is lagging 😂", "Give me a second, I’ll say it."]),
];

const QUICK_ACCESS: &[&str] = &["gym", "class", "lecture", "exam", "friends"];

/// Offered on every category screen as the "I'm stuck" button.
const SAFE_DEFAULT: &str = "I know what I mean — I just need a second.";

/// The authored table as a catalog source, ready for validation.
#[must_use]
pub fn source() -> CatalogSource {
    let scoped = ACTIVITIES
        .iter()
        .map(|entry| (Scope::Activities, entry))
        .chain(PLACES.iter().map(|entry| (Scope::Places, entry)));

    CatalogSource {
        shared: to_owned_all(SHARED_PHRASES),
        quick_access: to_owned_all(QUICK_ACCESS),
        safe_default: Some(SAFE_DEFAULT.to_owned()),
        categories: scoped
            .map(|(scope, (label, phrases))| CategorySource {
                id: None,
                label: (*label).to_owned(),
                scope,
                phrases: to_owned_all(phrases),
            })
            .collect(),
    }
}

fn to_owned_all(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}
