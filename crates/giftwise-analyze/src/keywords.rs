//! Dual-pass keyword extraction.
//!
//! Two independent passes — strict tokens from the normalized text and a
//! permissive fallback over the raw text — are unioned into one keyword
//! set. The overlap is deliberate: the classifier needs only a single
//! signal hit per label, so missing a true interest costs more than the
//! occasional spurious token.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

/// Tokens never useful as evidence.
pub const STOP_WORDS: &[&str] = &["the", "and", "for", "with", "that", "this", "from"];

/// Compound phrases scanned for as a unit. Each match contributes an
/// underscore-joined keyword in addition to its component words, so a
/// phrase can satisfy compound triggers like `adventure_travel`.
pub const PHRASES: &[&str] = &[
    "indie movie",
    "sustainable fashion",
    "tech company",
    "adventure travel",
    "practical gift",
    "hip hop",
    "self care",
];

static WORD_STRIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z'\-]").unwrap());

fn keep(token: &str) -> bool {
    token.len() > 2 && !STOP_WORDS.contains(&token)
}

/// Strict pass: whitespace tokens of already-normalized text.
pub fn clean_tokens(clean: &str) -> BTreeSet<String> {
    clean
        .split_whitespace()
        .filter(|t| keep(t))
        .map(|t| t.to_string())
        .collect()
}

/// Fallback pass over the raw input. Each whitespace token is lowercased
/// and stripped of characters outside letters, hyphen, and apostrophe,
/// recovering words the strict pass loses to punctuation adjacency.
pub fn raw_fallback_tokens(raw: &str) -> BTreeSet<String> {
    raw.to_lowercase()
        .split_whitespace()
        .map(|t| WORD_STRIP_RE.replace_all(t, "").into_owned())
        .filter(|t| keep(t))
        .collect()
}

/// Phrase pass: scan normalized text for known compound phrases.
pub fn detect_phrases(clean: &str) -> BTreeSet<String> {
    PHRASES
        .iter()
        .filter(|p| clean.contains(**p))
        .map(|p| p.replace(' ', "_"))
        .collect()
}

/// Union of all three passes, deduplicated and deterministically ordered.
pub fn extract(clean: &str, raw: &str) -> BTreeSet<String> {
    let mut keywords = clean_tokens(clean);
    keywords.extend(detect_phrases(clean));
    keywords.extend(raw_fallback_tokens(raw));
    keywords
}
