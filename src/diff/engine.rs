//! Comparison engine entry point.

use super::comparers::Walk;
use super::result::{DiffReport, ReportNode};
use crate::error::{ApiDiffError, Result};
use crate::model::{SymbolKind, SymbolNode};
use crate::policy::IgnorePolicy;
use std::collections::HashSet;

/// Compares two surface trees and produces a [`DiffReport`].
///
/// The engine is a stateless value: it holds nothing across calls, and
/// independent comparisons may run in parallel as long as each call gets
/// its own (read-only) trees and policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffEngine;

impl DiffEngine {
    /// Create a new diff engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compare two surface roots under the given ignore policy.
    ///
    /// Both trees are validated before any report is built, so an error
    /// never leaves a partially valid report behind:
    ///
    /// - duplicate identity keys among any node's direct children are a
    ///   [`ApiDiffError::MalformedTree`];
    /// - roots with different identities are a
    ///   [`ApiDiffError::InvalidInput`].
    pub fn diff(
        &self,
        old: &SymbolNode,
        new: &SymbolNode,
        policy: &IgnorePolicy,
    ) -> Result<DiffReport> {
        validate_tree(old)?;
        validate_tree(new)?;
        if old.kind != new.kind || old.name != new.name {
            return Err(ApiDiffError::invalid_input(format!(
                "{} '{}' vs {} '{}'",
                old.kind, old.name, new.kind, new.name
            )));
        }

        // Identical inputs short-circuit to an empty report.
        if old.content_hash() == new.content_hash() {
            tracing::debug!(root = %old.name, "surfaces are identical, skipping walk");
            return Ok(DiffReport::new(ReportNode::new(old)));
        }

        let mut walk = Walk::new(policy);
        let root = walk.compare_pair(old, new);
        let mut report = DiffReport::new(root);
        report.calculate_summary(walk.suppressed);
        tracing::debug!(
            root = %old.name,
            added = report.summary.added,
            removed = report.summary.removed,
            suppressed = report.summary.suppressed,
            "comparison complete"
        );
        Ok(report)
    }
}

/// Reject trees whose direct children collide on identity key. Detected
/// up front, before the walk, so a malformed tree never produces a
/// partial report.
fn validate_tree(node: &SymbolNode) -> Result<()> {
    let mut seen = HashSet::with_capacity(node.children.len());
    let mut generic_ordinal = 0usize;
    for child in &node.children {
        // Ordinal keys are assigned positionally and cannot collide; the
        // counter only exists to mirror the walk's key derivation.
        let ordinal = if child.kind == SymbolKind::GenericParameter {
            let o = generic_ordinal;
            generic_ordinal += 1;
            o
        } else {
            0
        };
        if !seen.insert(child.identity_key(ordinal)) {
            return Err(ApiDiffError::malformed_tree(
                &node.qualified_path,
                format!("duplicate {} key for '{}'", child.kind, child.name),
            ));
        }
    }
    for child in &node.children {
        validate_tree(child)?;
    }
    Ok(())
}
