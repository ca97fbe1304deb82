//! Profile-source boundary types.
//!
//! Fetch failures are data, not panics: callers must be able to tell
//! "the adapter could not obtain text" apart from "the pipeline found no
//! signal in valid text", because the user-facing remedy differs.

use serde::{Deserialize, Serialize};

/// Why a profile source failed to produce text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceErrorKind {
    ProfileNotFound,
    PrivateProfile,
    NoContent,
    AccessError,
    UnsupportedSource,
    EmptyText,
}

/// Outcome of fetching raw profile text from a source.
///
/// On success `text` is non-empty and `error`/`error_kind` are absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchOutcome {
    pub success: bool,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<SourceErrorKind>,
}

impl FetchOutcome {
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: text.into(),
            error: None,
            error_kind: None,
        }
    }

    pub fn failed(kind: SourceErrorKind, message: impl Into<String>) -> Self {
        Self {
            success: false,
            text: String::new(),
            error: Some(message.into()),
            error_kind: Some(kind),
        }
    }
}

/// A collaborator that obtains raw profile text.
///
/// Fetching happens entirely outside the analysis pipeline; a source may
/// block, retry, or time out on its own terms and reports failure
/// through `FetchOutcome` rather than by raising.
pub trait ProfileSource: Send + Sync {
    fn name(&self) -> &'static str;

    fn fetch(&self, value: &str) -> FetchOutcome;
}

/// Strip the `@` prefix and internal whitespace from a user-supplied
/// handle before handing it to a source.
pub fn sanitize_handle(handle: &str) -> String {
    handle
        .trim()
        .chars()
        .filter(|c| *c != '@' && !c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_at_and_whitespace() {
        assert_eq!(sanitize_handle("  @jane doe "), "janedoe");
        assert_eq!(sanitize_handle("plain"), "plain");
    }

    #[test]
    fn error_kind_serializes_snake_case() {
        let json = serde_json::to_string(&SourceErrorKind::PrivateProfile).unwrap();
        assert_eq!(json, r#""private_profile""#);
    }

    #[test]
    fn failed_outcome_carries_kind_and_message() {
        let outcome = FetchOutcome::failed(SourceErrorKind::ProfileNotFound, "no such user");
        assert!(!outcome.success);
        assert!(outcome.text.is_empty());
        assert_eq!(outcome.error_kind, Some(SourceErrorKind::ProfileNotFound));
    }
}
