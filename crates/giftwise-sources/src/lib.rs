//! Profile sources: the boundary contract between text acquisition and
//! the analysis pipeline.
//!
//! The pipeline only ever sees a raw text string. Sources are the
//! collaborators that obtain one — manual entry here; network scrapers
//! (Instagram, Twitter) implement `ProfileSource` out of tree and report
//! failure kinds through the same `FetchOutcome` shape.

pub mod manual;
pub mod types;

pub use manual::ManualSource;
pub use types::{sanitize_handle, FetchOutcome, ProfileSource, SourceErrorKind};

/// Look up the built-in source for a selector string.
///
/// `None` means the selector names no source compiled into this binary;
/// the caller should surface `unsupported_source` rather than treat it
/// as an empty analysis.
pub fn resolve(name: &str) -> Option<&'static dyn ProfileSource> {
    match name {
        "manual" => Some(&ManualSource),
        _ => None,
    }
}
