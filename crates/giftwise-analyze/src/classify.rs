//! Signal-table classification.
//!
//! A label activates when any of its triggers is either exactly present
//! in the keyword set or a substring of some keyword. This is a coverage
//! union: no scores, no thresholds, no exclusivity between labels.

use std::collections::BTreeSet;

use giftwise_kb::SignalTable;

/// Match `keywords` against `table`, returning every activated label in
/// the table's (sorted) label order. Labels always come from the table's
/// key set — classification never invents vocabulary.
///
/// Substring matching is intentionally permissive: an inflected keyword
/// ("hikers") still satisfies a shorter trigger, and a compound keyword
/// ("adventure_travel") satisfies multiple related triggers. Short
/// triggers embedded in unrelated longer keywords also match; that
/// trade-off is accepted and pinned by a test below.
pub fn classify(keywords: &BTreeSet<String>, table: &SignalTable) -> Vec<String> {
    if keywords.is_empty() {
        return Vec::new();
    }

    let mut labels = Vec::new();
    for (label, triggers) in table.iter() {
        let hit = triggers.iter().any(|trigger| {
            let trigger = trigger.to_lowercase();
            keywords.contains(&trigger) || keywords.iter().any(|k| k.contains(&trigger))
        });
        if hit {
            labels.push(label.to_string());
        }
    }
    labels
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(json: &str) -> SignalTable {
        serde_json::from_str(json).unwrap()
    }

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn exact_trigger_activates_label() {
        let t = table(r#"{"fitness": ["gym", "yoga"]}"#);
        assert_eq!(classify(&set(&["gym", "lover"]), &t), vec!["fitness"]);
    }

    #[test]
    fn trigger_matches_as_substring_of_keyword() {
        // "hik" is not a trigger; "hiking" inside "hikings" is the shape
        // that matters: inflections still hit.
        let t = table(r#"{"nature": ["hiking"]}"#);
        assert_eq!(classify(&set(&["hikings"]), &t), vec!["nature"]);
    }

    #[test]
    fn compound_keyword_satisfies_component_triggers() {
        let t = table(r#"{"travel": ["adventure", "travel"], "dance": ["ballet"]}"#);
        assert_eq!(classify(&set(&["adventure_travel"]), &t), vec!["travel"]);
    }

    #[test]
    fn one_keyword_may_activate_many_labels() {
        let t = table(r#"{"art": ["design"], "fashion": ["designer"]}"#);
        let labels = classify(&set(&["designer"]), &t);
        assert_eq!(labels, vec!["art", "fashion"]);
    }

    #[test]
    fn empty_keyword_set_yields_no_labels() {
        let t = table(r#"{"fitness": ["gym"]}"#);
        assert!(classify(&BTreeSet::new(), &t).is_empty());
    }

    #[test]
    fn labels_come_out_in_sorted_table_order() {
        let t = table(r#"{"zeta": ["zz"], "alpha": ["aa"]}"#);
        assert_eq!(classify(&set(&["aazz"]), &t), vec!["alpha", "zeta"]);
    }

    #[test]
    fn short_trigger_inside_unrelated_keyword_still_matches() {
        // Regression pin for the permissive-substring decision: "art"
        // embedded in "smartwatch" activates the art label.
        let t = table(r#"{"art": ["art"]}"#);
        assert_eq!(classify(&set(&["smartwatch"]), &t), vec!["art"]);
    }
}
