//! Identity-key partition of two sibling collections.

use crate::model::{IdentityKey, SymbolNode};
use indexmap::IndexMap;

/// Result of partitioning one level of siblings: nodes only in the new
/// tree, nodes only in the old tree, and pairs present in both.
#[derive(Debug, Default)]
pub struct LevelDiff<'a> {
    /// New-side nodes with no old counterpart, in new-side declared order.
    pub added: Vec<&'a SymbolNode>,
    /// Old-side nodes with no new counterpart, in old-side declared order.
    pub removed: Vec<&'a SymbolNode>,
    /// Matched pairs `(old, new)`, in old-side declared order.
    pub matched: Vec<(&'a SymbolNode, &'a SymbolNode)>,
}

impl LevelDiff<'_> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.matched.is_empty()
    }
}

/// Partition two ordered sibling collections by identity key.
///
/// Key-indexed lookup, linear in the number of siblings. Sibling order
/// never affects which nodes match, only the order of the output sets.
/// Duplicate keys within one side are rejected up front by the engine's
/// tree validation; a duplicate reaching this point would shadow its
/// predecessor.
pub fn partition<'a>(
    old: impl IntoIterator<Item = &'a SymbolNode>,
    new: impl IntoIterator<Item = &'a SymbolNode>,
) -> LevelDiff<'a> {
    let mut new_by_key: IndexMap<IdentityKey<'a>, &'a SymbolNode> = new
        .into_iter()
        .enumerate()
        .map(|(ordinal, node)| (node.identity_key(ordinal), node))
        .collect();

    let mut diff = LevelDiff::default();
    for (ordinal, node) in old.into_iter().enumerate() {
        match new_by_key.shift_remove(&node.identity_key(ordinal)) {
            Some(counterpart) => diff.matched.push((node, counterpart)),
            None => diff.removed.push(node),
        }
    }
    // shift_remove keeps the survivors in declared order.
    diff.added = new_by_key.into_values().collect();
    diff
}
