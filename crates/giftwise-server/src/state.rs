//! Shared application state.

use std::sync::Arc;

use giftwise_analyze::Analyzer;
use giftwise_core::GiftwiseConfig;
use giftwise_kb::KnowledgeBase;

/// State shared by all route handlers.
///
/// The knowledge base is loaded once at startup and never mutated, so
/// handlers read it concurrently without synchronization.
pub struct AppState {
    pub config: GiftwiseConfig,
    pub kb: Arc<KnowledgeBase>,
    pub analyzer: Analyzer,
}

impl AppState {
    pub fn new(config: GiftwiseConfig, kb: KnowledgeBase) -> Self {
        let kb = Arc::new(kb);
        let analyzer = Analyzer::new(kb.clone());
        Self {
            config,
            kb,
            analyzer,
        }
    }
}
