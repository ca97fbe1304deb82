//! GiftWise Core — shared errors and configuration.

pub mod config;
pub mod error;

pub use config::{GiftwiseConfig, KbPaths};
pub use error::{Error, Result};
