//! GiftWise analysis pipeline.
//!
//! Pure inference over raw profile text: normalization, dual-pass
//! keyword extraction, trait/interest classification against the static
//! knowledge base, and bounded gift ranking. No I/O happens here; text
//! acquisition and presentation live in other crates.

pub mod classify;
pub mod keywords;
pub mod normalize;
pub mod pipeline;
pub mod rank;

pub use classify::classify;
pub use keywords::extract;
pub use normalize::normalize;
pub use pipeline::{Analyzer, Recommendation};
pub use rank::{rank, MAX_GIFTS};
