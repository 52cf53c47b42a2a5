//! Diff result structures.

use crate::model::{SymbolKind, SymbolNode};
use serde::{Deserialize, Serialize};

/// Whether a reported symbol appeared in or disappeared from the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Added,
    Removed,
}

/// One reported discrepancy: a symbol present on only one side of a
/// matched level. The report owns its copy of the symbol; it holds no
/// borrow into the compared trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    pub symbol: SymbolNode,
    pub direction: Direction,
}

/// One comparison level: the root pair, or one matched pair that was
/// recursed into. Entries from every member category of the pair land on
/// this node; `children` holds one node per matched child pair that was
/// itself recursed into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportNode {
    pub kind: SymbolKind,
    pub name: String,
    pub qualified_path: String,
    pub added: Vec<DiffEntry>,
    pub removed: Vec<DiffEntry>,
    pub children: Vec<ReportNode>,
}

impl ReportNode {
    /// Create an empty node for a matched pair.
    #[must_use]
    pub fn new(symbol: &SymbolNode) -> Self {
        Self {
            kind: symbol.kind,
            name: symbol.name.clone(),
            qualified_path: symbol.qualified_path.clone(),
            added: Vec::new(),
            removed: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Whether this subtree reports anything.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty()
            || !self.removed.is_empty()
            || self.children.iter().any(ReportNode::has_changes)
    }

    /// All added entries in this subtree, depth-first.
    #[must_use]
    pub fn flattened_added(&self) -> Vec<&DiffEntry> {
        let mut out = Vec::new();
        self.collect(Direction::Added, &mut out);
        out
    }

    /// All removed entries in this subtree, depth-first.
    #[must_use]
    pub fn flattened_removed(&self) -> Vec<&DiffEntry> {
        let mut out = Vec::new();
        self.collect(Direction::Removed, &mut out);
        out
    }

    fn collect<'a>(&'a self, direction: Direction, out: &mut Vec<&'a DiffEntry>) {
        let own = match direction {
            Direction::Added => &self.added,
            Direction::Removed => &self.removed,
        };
        out.extend(own.iter());
        for child in &self.children {
            child.collect(direction, out);
        }
    }

    /// Find the report node for a compared pair by qualified path, in this
    /// subtree.
    #[must_use]
    pub fn find(&self, qualified_path: &str) -> Option<&ReportNode> {
        if self.qualified_path == qualified_path {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(qualified_path))
    }
}

/// Counts over one whole comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    /// Findings discarded by the ignore policy before recording.
    pub suppressed: usize,
    pub total_changes: usize,
}

/// Complete result of one surface comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct DiffReport {
    /// Summary statistics.
    pub summary: DiffSummary,
    /// Root comparison level (the assembly pair).
    pub root: ReportNode,
}

impl DiffReport {
    /// Create a report around the root level with an empty summary.
    pub fn new(root: ReportNode) -> Self {
        Self {
            summary: DiffSummary::default(),
            root,
        }
    }

    /// Recalculate summary statistics from the report tree.
    pub fn calculate_summary(&mut self, suppressed: usize) {
        self.summary.added = self.root.flattened_added().len();
        self.summary.removed = self.root.flattened_removed().len();
        self.summary.suppressed = suppressed;
        self.summary.total_changes = self.summary.added + self.summary.removed;
    }

    /// Whether any unsuppressed difference was found.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.summary.total_changes > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: SymbolKind, path: &str, direction: Direction) -> DiffEntry {
        let name = path.rsplit('.').next().unwrap_or(path);
        DiffEntry {
            symbol: SymbolNode::new(kind, name, path),
            direction,
        }
    }

    #[test]
    fn test_flatten_and_find() {
        let root_symbol = SymbolNode::new(SymbolKind::Assembly, "Lib", "Lib");
        let ns_symbol = SymbolNode::new(SymbolKind::Namespace, "A", "A");
        let ty_symbol = SymbolNode::new(SymbolKind::Type, "C", "A.C");

        let mut ty_node = ReportNode::new(&ty_symbol);
        ty_node
            .removed
            .push(entry(SymbolKind::Method, "A.C.M", Direction::Removed));
        let mut ns_node = ReportNode::new(&ns_symbol);
        ns_node
            .added
            .push(entry(SymbolKind::Type, "A.C2", Direction::Added));
        ns_node.children.push(ty_node);
        let mut root = ReportNode::new(&root_symbol);
        root.children.push(ns_node);

        assert!(root.has_changes());
        assert_eq!(root.flattened_added().len(), 1);
        assert_eq!(root.flattened_removed().len(), 1);
        assert_eq!(
            root.find("A.C").map(|n| n.removed.len()),
            Some(1)
        );
        assert!(root.find("A.X").is_none());

        let mut report = DiffReport::new(root);
        report.calculate_summary(3);
        assert_eq!(report.summary.total_changes, 2);
        assert_eq!(report.summary.suppressed, 3);
        assert!(report.has_changes());
    }
}
