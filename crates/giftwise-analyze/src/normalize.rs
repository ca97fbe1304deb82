//! Text normalization: strip links, mentions, hashtags, and symbols.

use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"http\S+").unwrap());
static MENTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@\w+").unwrap());
static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#\w+").unwrap());
// Keep apostrophes and hyphens so contractions and hyphenated
// compounds survive normalization.
static SYMBOL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z\s'\-]").unwrap());
static SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Lowercase `raw` and strip URLs, @mentions, #hashtags, and any
/// character outside lowercase letters, whitespace, apostrophe, and
/// hyphen. Consecutive whitespace collapses to a single space.
///
/// Never fails: fully-noise input yields an empty string, which
/// downstream stages treat as "no signal" rather than an error.
pub fn normalize(raw: &str) -> String {
    let text = raw.to_lowercase();
    let text = URL_RE.replace_all(&text, "");
    let text = MENTION_RE.replace_all(&text, "");
    let text = HASHTAG_RE.replace_all(&text, "");
    let text = SYMBOL_RE.replace_all(&text, "");
    SPACE_RE.replace_all(&text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(
            normalize("Gym lover, coffee addict!"),
            "gym lover coffee addict"
        );
    }

    #[test]
    fn strips_urls_mentions_hashtags() {
        assert_eq!(
            normalize("follow @jane #travel https://example.com/x hiking"),
            "follow hiking"
        );
    }

    #[test]
    fn keeps_contractions_and_hyphens() {
        assert_eq!(normalize("I'm a die-hard reader"), "i'm a die-hard reader");
    }

    #[test]
    fn noise_only_input_yields_empty_string() {
        assert_eq!(normalize("!!! 123 @x #y http://z"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(normalize("a  lot\n of\t space"), "a lot of space");
    }
}
