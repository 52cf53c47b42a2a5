//! Ignore policy: suppression of reported differences by logical path.
//!
//! A policy is an immutable set of dot-delimited logical paths, typically
//! supplied by the host's configuration layer. An add/remove finding is
//! suppressed when its coarse path, or any strict ancestor of it, exactly
//! equals a configured entry. The path grammar is part of the external
//! contract: ignore files authored against one engine version must keep
//! matching in later versions.

use crate::error::{ApiDiffError, Result};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Validated set of ignore paths.
///
/// Entries match the *coarse* identity of a symbol: its qualified path
/// without signature or generic arity. Ignoring `"A.C.M"` therefore
/// suppresses every overload and generic variant of `M`, and ignoring
/// `"A.C"` suppresses anything reported under that type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct IgnorePolicy {
    entries: IndexSet<String>,
}

impl IgnorePolicy {
    /// A policy that suppresses nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a policy from path entries, validating each against the
    /// logical-path grammar. An invalid entry is a
    /// [`ApiDiffError::PolicyMismatch`]; it is never silently dropped.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = IndexSet::new();
        for entry in entries {
            let entry = entry.into();
            validate_entry(&entry)?;
            set.insert(entry);
        }
        Ok(Self { entries: set })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Configured entries, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Whether a finding at the given coarse path is suppressed: exact
    /// match on the path itself or on any strict dot-ancestor. Siblings of
    /// an ignored path are never affected.
    #[must_use]
    pub fn is_suppressed(&self, coarse_path: &str) -> bool {
        if self.entries.is_empty() {
            return false;
        }
        let mut path = coarse_path;
        loop {
            if self.entries.contains(path) {
                return true;
            }
            match path.rfind('.') {
                Some(idx) => path = &path[..idx],
                None => return false,
            }
        }
    }
}

impl TryFrom<Vec<String>> for IgnorePolicy {
    type Error = ApiDiffError;

    fn try_from(entries: Vec<String>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<IgnorePolicy> for Vec<String> {
    fn from(policy: IgnorePolicy) -> Self {
        policy.entries.into_iter().collect()
    }
}

/// Logical-path grammar: one or more dot-separated identifier segments.
/// An identifier starts with a letter or underscore and may carry a CLR
/// style backtick arity suffix (`` List`1 ``). `ctor` is an ordinary
/// segment, not special-cased here.
fn validate_entry(entry: &str) -> Result<()> {
    if entry.is_empty() {
        return Err(ApiDiffError::policy_mismatch(entry, "empty path"));
    }
    for segment in entry.split('.') {
        validate_segment(entry, segment)?;
    }
    Ok(())
}

fn validate_segment(entry: &str, segment: &str) -> Result<()> {
    let (ident, arity) = match segment.split_once('`') {
        Some((ident, arity)) => (ident, Some(arity)),
        None => (segment, None),
    };

    let mut chars = ident.chars();
    match chars.next() {
        None => return Err(ApiDiffError::policy_mismatch(entry, "empty path segment")),
        Some(c) if c.is_alphabetic() || c == '_' => {}
        Some(c) => {
            return Err(ApiDiffError::policy_mismatch(
                entry,
                format!("segment '{segment}' may not start with '{c}'"),
            ))
        }
    }
    if let Some(c) = chars.find(|c| !c.is_alphanumeric() && *c != '_') {
        return Err(ApiDiffError::policy_mismatch(
            entry,
            format!("segment '{segment}' contains invalid character '{c}'"),
        ));
    }

    if let Some(arity) = arity {
        if arity.is_empty() || !arity.chars().all(|c| c.is_ascii_digit()) {
            return Err(ApiDiffError::policy_mismatch(
                entry,
                format!("segment '{segment}' has a malformed arity suffix"),
            ));
        }
    }
    Ok(())
}
