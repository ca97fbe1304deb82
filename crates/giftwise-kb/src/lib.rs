//! GiftWise Knowledge Base — static lexical tables and the gift catalog.
//!
//! Three tables drive the pipeline: trait signals, interest-category
//! signals, and the gift catalog. All three are data, not logic: they
//! live in human-editable JSON files (with compiled-in defaults) and are
//! the sole source of matching vocabulary for the classifier and ranker.

pub mod loader;
pub mod types;

pub use loader::{builtin, load};
pub use types::{GiftItem, KnowledgeBase, SignalTable};
