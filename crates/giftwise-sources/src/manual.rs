//! Manual text entry — the always-available source.

use crate::types::{FetchOutcome, ProfileSource, SourceErrorKind};

/// Direct manual entry: the submitted value is the profile text itself.
pub struct ManualSource;

impl ProfileSource for ManualSource {
    fn name(&self) -> &'static str {
        "manual"
    }

    fn fetch(&self, value: &str) -> FetchOutcome {
        if value.trim().is_empty() {
            FetchOutcome::failed(
                SourceErrorKind::EmptyText,
                "No text provided for manual analysis",
            )
        } else {
            FetchOutcome::ok(value)
        }
    }
}
