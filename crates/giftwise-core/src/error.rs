//! Error types for GiftWise.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Knowledge base error: {0}")]
    KnowledgeBase(String),

    #[error("Source error: {0}")]
    Source(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
