//! Per-kind comparison rules and the recursive walk.
//!
//! Each symbol kind specializes two things: the identity key used when
//! partitioning siblings (see [`SymbolNode::identity_key`]) and whether a
//! matched pair is recursed into. Both are selected at a single dispatch
//! point, the `match` in [`Walk::compare_pair`].

use super::level::partition;
use super::result::{DiffEntry, Direction, ReportNode};
use crate::model::{SymbolKind, SymbolNode};
use crate::policy::IgnorePolicy;

/// Member categories partitioned independently under a matched type pair,
/// in report order.
const TYPE_MEMBER_KINDS: [SymbolKind; 8] = [
    SymbolKind::Interface,
    SymbolKind::Constructor,
    SymbolKind::Method,
    SymbolKind::Property,
    SymbolKind::Field,
    SymbolKind::Event,
    SymbolKind::GenericParameter,
    SymbolKind::Type,
];

/// One comparison's working state: the policy in force and the count of
/// findings it discarded.
pub(super) struct Walk<'p> {
    policy: &'p IgnorePolicy,
    pub suppressed: usize,
}

impl<'p> Walk<'p> {
    pub fn new(policy: &'p IgnorePolicy) -> Self {
        Self {
            policy,
            suppressed: 0,
        }
    }

    /// Compare one matched pair and produce its report level.
    pub fn compare_pair(&mut self, old: &SymbolNode, new: &SymbolNode) -> ReportNode {
        tracing::trace!(path = %old.qualified_path, kind = %old.kind, "comparing matched pair");
        let mut report = ReportNode::new(old);
        match old.kind {
            SymbolKind::Assembly => {
                self.compare_category(old, new, SymbolKind::Namespace, &mut report);
            }
            SymbolKind::Namespace => {
                self.compare_category(old, new, SymbolKind::Type, &mut report);
            }
            SymbolKind::Type => {
                for kind in TYPE_MEMBER_KINDS {
                    self.compare_category(old, new, kind, &mut report);
                }
            }
            // Matched leaves carry no comparable structure of their own:
            // a matched invocable already agrees on signature and arity,
            // interface entries stand for the implementation relation only,
            // and generic parameter renames are not contract changes.
            _ => {}
        }
        report
    }

    /// Partition one member category of a matched pair and record the
    /// outcome.
    fn compare_category(
        &mut self,
        old: &SymbolNode,
        new: &SymbolNode,
        kind: SymbolKind,
        report: &mut ReportNode,
    ) {
        let diff = partition(old.children_of_kind(kind), new.children_of_kind(kind));
        for node in diff.removed {
            self.record(node, Direction::Removed, report);
        }
        for node in diff.added {
            self.record(node, Direction::Added, report);
        }
        for (old_child, new_child) in diff.matched {
            match kind {
                SymbolKind::Namespace | SymbolKind::Type => {
                    // Recursed pairs always get a report level, even a
                    // quiet one, so callers can navigate to it.
                    let child = self.compare_pair(old_child, new_child);
                    report.children.push(child);
                }
                SymbolKind::Property | SymbolKind::Field | SymbolKind::Event => {
                    // Same name, different declared type: the old
                    // declaration is gone. Reported as a bare removal.
                    if old_child.type_descriptor != new_child.type_descriptor {
                        self.record(old_child, Direction::Removed, report);
                    }
                }
                _ => {}
            }
        }
    }

    /// Record one finding unless the policy suppresses it. A suppressed
    /// finding is counted and dropped; it never reaches the report.
    fn record(&mut self, node: &SymbolNode, direction: Direction, report: &mut ReportNode) {
        if self.policy.is_suppressed(node.coarse_path()) {
            self.suppressed += 1;
            tracing::debug!(
                path = %node.qualified_path,
                kind = %node.kind,
                ?direction,
                "finding suppressed by ignore policy"
            );
            return;
        }
        let entry = DiffEntry {
            symbol: node.clone(),
            direction,
        };
        match direction {
            Direction::Added => report.added.push(entry),
            Direction::Removed => report.removed.push(entry),
        }
    }
}
