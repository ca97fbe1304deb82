//! Pipeline orchestrator: raw text in, recommendation out.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use giftwise_kb::{GiftItem, KnowledgeBase};

use crate::classify::classify;
use crate::keywords::extract;
use crate::normalize::normalize;
use crate::rank::{rank, MAX_GIFTS};

/// Terminal pipeline output, handed to the presentation layer as a
/// value. Never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub traits: Vec<String>,
    pub interests: Vec<String>,
    pub gifts: Vec<GiftItem>,
}

impl Recommendation {
    /// True when the input carried no usable signal. A valid outcome,
    /// distinct from any upstream fetch failure.
    pub fn is_empty(&self) -> bool {
        self.traits.is_empty() && self.interests.is_empty() && self.gifts.is_empty()
    }
}

/// The full inference pipeline over a loaded knowledge base.
///
/// Pure and synchronous: no I/O, no locking, no retries. The knowledge
/// base is immutable after load, so one `Analyzer` may serve arbitrarily
/// many concurrent invocations; identical input yields identical output.
pub struct Analyzer {
    kb: Arc<KnowledgeBase>,
}

impl Analyzer {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Run normalize → extract → classify (traits, interests) → rank.
    ///
    /// Accepts any string, including empty; empty traits/interests/gifts
    /// signal "insufficient signal", never an error.
    pub fn run(&self, raw: &str) -> Recommendation {
        let clean = normalize(raw);
        let keywords = extract(&clean, raw);
        debug!("Extracted {} keywords", keywords.len());

        let traits = classify(&keywords, &self.kb.traits);
        let interests = classify(&keywords, &self.kb.interests);
        let gifts = rank(&interests, &self.kb.catalog, MAX_GIFTS);
        debug!(
            "Classified {} traits, {} interests; {} gifts selected",
            traits.len(),
            interests.len(),
            gifts.len()
        );

        Recommendation {
            traits,
            interests,
            gifts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer() -> Analyzer {
        Analyzer::new(Arc::new(giftwise_kb::builtin().clone()))
    }

    fn has(labels: &[String], label: &str) -> bool {
        labels.iter().any(|l| l == label)
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let result = analyzer().run("");
        assert!(result.is_empty());
    }

    #[test]
    fn stop_words_and_punctuation_only_yield_empty_result() {
        let result = analyzer().run("the and for with ... !!!");
        assert!(result.traits.is_empty());
        assert!(result.interests.is_empty());
        assert!(result.gifts.is_empty());
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let a = analyzer();
        let bio = "Startup founder, yoga at dawn, vinyl collector";
        let first = serde_json::to_string(&a.run(bio)).unwrap();
        let second = serde_json::to_string(&a.run(bio)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn gifts_are_bounded_even_for_keyword_rich_input() {
        let bio = "travel fitness tech fashion gaming books coffee music \
                   dance food art nature photography movies wellness";
        let result = analyzer().run(bio);
        assert!(result.gifts.len() <= 5);
        assert!(!result.gifts.is_empty());
    }

    #[test]
    fn labels_stay_within_table_vocabulary() {
        let a = analyzer();
        let result = a.run("hiking photography coffee coding yoga painting novels");
        assert!(!result.traits.is_empty());
        assert!(!result.interests.is_empty());
        for t in &result.traits {
            assert!(a.knowledge_base().traits.contains_label(t), "unknown trait {}", t);
        }
        for i in &result.interests {
            assert!(a.knowledge_base().interests.contains_label(i), "unknown interest {}", i);
        }
    }

    #[test]
    fn gym_coffee_developer_bio() {
        let result = analyzer().run("Gym lover, coffee addict, software developer");
        assert!(has(&result.interests, "fitness"));
        assert!(has(&result.interests, "tech"));
        assert!(has(&result.interests, "coffee"));
        assert!(has(&result.traits, "fitness_focused"));
        assert!(has(&result.traits, "tech_enthusiast"));
        assert!(!result.gifts.is_empty());
        for gift in &result.gifts {
            assert!(has(&result.interests, &gift.category));
        }
    }

    #[test]
    fn hiking_photography_minimalist_bio() {
        let result = analyzer().run("I love hiking, photography, and minimalist design");
        assert!(has(&result.interests, "nature"));
        assert!(has(&result.interests, "photography"));
        assert!(has(&result.traits, "adventurous"));
        assert!(has(&result.traits, "creative"));
        assert!(has(&result.traits, "minimalist"));
    }

    #[test]
    fn raw_fallback_recovers_hashtag_signal() {
        // The clean pass strips "#travel" entirely; the raw fallback pass
        // still surfaces "travel" as a keyword. Recall over precision.
        let result = analyzer().run("weekend plans #travel");
        assert!(has(&result.interests, "travel"));
        assert!(has(&result.traits, "adventurous"));
    }
}
