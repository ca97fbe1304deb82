//! Knowledge-base types: signal tables and the gift catalog.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A label → ordered trigger list mapping, e.g. trait signals or
/// interest-category signals.
///
/// Backed by a `BTreeMap` so label iteration order is deterministic
/// regardless of the order labels appear in the source file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignalTable {
    pub entries: BTreeMap<String, Vec<String>>,
}

impl SignalTable {
    /// Iterate labels with their trigger lists in sorted label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A single recommendable catalog item, tagged with one interest category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftItem {
    pub title: String,
    pub category: String,
    pub price: u32,
    pub currency: String,
    pub image: String,
    pub link: String,
    pub tags: Vec<String>,
}

/// The three static lexical tables, loaded once at startup and
/// read-only afterwards. Catalog order is preserved: it is the
/// implicit priority signal for ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub traits: SignalTable,
    pub interests: SignalTable,
    pub catalog: Vec<GiftItem>,
}

impl KnowledgeBase {
    /// Catalog categories that are not keys of the interest table.
    ///
    /// Legal at authoring time (such items are simply never ranked),
    /// but worth surfacing to catalog authors via `validate`.
    pub fn orphan_categories(&self) -> Vec<String> {
        let mut orphans: Vec<String> = Vec::new();
        for item in &self.catalog {
            if !self.interests.contains_label(&item.category)
                && !orphans.contains(&item.category)
            {
                orphans.push(item.category.clone());
            }
        }
        orphans
    }
}
