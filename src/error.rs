//! Unified error types for apidiff.
//!
//! Diff findings are never errors: every added/removed declaration is a
//! normal output value. The variants here cover caller misuse and
//! configuration problems only, and all of them abort a comparison before
//! any partial report is produced.

use thiserror::Error;

/// Main error type for apidiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ApiDiffError {
    /// A symbol tree violates the sibling-uniqueness invariant: two direct
    /// children of one node carry the same identity key.
    #[error("malformed symbol tree at '{path}': {detail}")]
    MalformedTree { path: String, detail: String },

    /// An ignore-policy entry does not parse as a dot-delimited logical path.
    /// The offending entry is rejected, never silently dropped or matched.
    #[error("invalid ignore path '{entry}': {reason}")]
    PolicyMismatch { entry: String, reason: String },

    /// The two roots passed to a comparison do not describe the same
    /// library (different root identity).
    #[error("cannot compare unrelated roots: {0}")]
    InvalidInput(String),
}

impl ApiDiffError {
    /// Create a malformed-tree error located at the given qualified path.
    pub fn malformed_tree(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedTree {
            path: path.into(),
            detail: detail.into(),
        }
    }

    /// Create a policy error for one rejected ignore entry.
    pub fn policy_mismatch(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::PolicyMismatch {
            entry: entry.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Convenient Result type for apidiff operations.
pub type Result<T> = std::result::Result<T, ApiDiffError>;
