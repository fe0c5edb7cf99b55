use super::*;

fn phrase(id: &str, text: &str) -> Phrase {
    Phrase { id: id.into(), category_id: id.split('.').next().unwrap().into(), text: text.into() }
}

const NO_CATEGORIES: [Category; 0] = [];

fn category(id: &str, label: &str) -> Category {
    Category { id: id.into(), label: label.into(), scope: Scope::Places, phrases: vec![] }
}

// =============================================================================
// normalize / tokens
// =============================================================================

#[test]
fn normalize_lowercases_and_collapses_whitespace() {
    assert_eq!(normalize("  Can   I\thave A  moment "), "can i have a moment");
}

#[test]
fn tokens_split_on_punctuation() {
    assert_eq!(tokens("Sorry — can you say that?"), ["sorry", "can", "you", "say", "that"]);
}

#[test]
fn tokens_keep_apostrophes_and_digits() {
    assert_eq!(tokens("I'll try 2 times"), ["i'll", "try", "2", "times"]);
}

// =============================================================================
// score_text
// =============================================================================

#[test]
fn score_empty_query_is_zero() {
    assert_eq!(score_text("   ", "anything"), 0);
}

#[test]
fn score_counts_token_overlap() {
    assert_eq!(score_text("slowly please", "Can you say that more slowly, please?"), 2);
}

#[test]
fn score_repeated_query_tokens_count_once() {
    assert_eq!(score_text("moment moment", "Give me a moment."), 1);
}

#[test]
fn score_adds_substring_boost() {
    // overlap 2 + substring 2
    assert_eq!(score_text("more slowly", "Can you say that more slowly?"), 4);
}

#[test]
fn score_adds_exact_boost() {
    // overlap 1 + substring 2 + exact 4
    assert_eq!(score_text("gym", "Gym"), 7);
}

#[test]
fn score_no_match_is_zero() {
    assert_eq!(score_text("basketball", "Can I have a moment?"), 0);
}

// =============================================================================
// rank
// =============================================================================

#[test]
fn rank_category_label_outranks_phrases() {
    let phrases = [phrase("gym.0", "Wait — let me restart at the gym")];
    let categories = [category("gym", "Gym")];
    let hits = rank("gym", &phrases, &categories);
    assert_eq!(hits.len(), 2);
    assert!(matches!(&hits[0], SearchHit::Category { id, .. } if id == "gym"));
    assert!(matches!(&hits[1], SearchHit::Phrase { id, .. } if id == "gym.0"));
}

#[test]
fn rank_ties_keep_input_order() {
    let phrases = [phrase("a.0", "stuck here"), phrase("a.1", "still stuck")];
    let hits = rank("stuck", &phrases, &NO_CATEGORIES);
    assert_eq!(
        hits,
        [
            SearchHit::Phrase { id: "a.0".into(), text: "stuck here".into() },
            SearchHit::Phrase { id: "a.1".into(), text: "still stuck".into() },
        ]
    );
}

#[test]
fn rank_truncates_to_max_hits() {
    let phrases: Vec<Phrase> = (0..20).map(|i| phrase(&format!("a.{i}"), &format!("moment {i}"))).collect();
    let hits = rank("moment", &phrases, &NO_CATEGORIES);
    assert_eq!(hits.len(), MAX_HITS);
}

#[test]
fn rank_empty_query_returns_nothing() {
    let phrases = [phrase("a.0", "anything")];
    assert!(rank("", &phrases, &NO_CATEGORIES).is_empty());
}

#[test]
fn search_hit_serializes_with_kind_tag() {
    let hit = SearchHit::Category { id: "gym".into(), label: "Gym".into(), scope: Scope::Places };
    let json = serde_json::to_value(&hit).unwrap();
    assert_eq!(json["kind"], "category");
    assert_eq!(json["scope"], "places");
}
