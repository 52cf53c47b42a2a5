//! Core symbol tree data structures.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use xxhash_rust::xxh3::Xxh3;

/// Kind of one declared element of a public surface.
///
/// A closed set: per-kind comparison behavior is selected by matching on
/// this enum, not by an open strategy hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolKind {
    /// Root of a symbol tree (one compiled library version).
    Assembly,
    Namespace,
    Type,
    /// A declared interface implementation on a type. The node stands for
    /// the implementation relation, not the interface's own shape.
    Interface,
    Constructor,
    Method,
    Property,
    Field,
    Event,
    GenericParameter,
    /// Parameters are carried inside [`Signature`], not as child nodes;
    /// the kind exists so descriptors can be tagged uniformly.
    Parameter,
}

impl SymbolKind {
    /// Invocable kinds carry a signature and use it for identity.
    #[must_use]
    pub const fn is_invocable(self) -> bool {
        matches!(self, Self::Constructor | Self::Method)
    }

    /// Lowercase label used in logs and error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Assembly => "assembly",
            Self::Namespace => "namespace",
            Self::Type => "type",
            Self::Interface => "interface",
            Self::Constructor => "constructor",
            Self::Method => "method",
            Self::Property => "property",
            Self::Field => "field",
            Self::Event => "event",
            Self::GenericParameter => "generic parameter",
            Self::Parameter => "parameter",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Signature of an invocable symbol: positional parameter type descriptors
/// plus a return type descriptor (methods only).
///
/// Equality is positional: same arity and the same type descriptor at every
/// position. Parameter names are not part of the signature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    pub parameters: Vec<String>,
    pub return_type: Option<String>,
}

impl Signature {
    #[must_use]
    pub fn new(parameters: Vec<String>, return_type: Option<String>) -> Self {
        Self {
            parameters,
            return_type,
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.parameters.join(", "))?;
        if let Some(ret) = &self.return_type {
            write!(f, " -> {ret}")?;
        }
        Ok(())
    }
}

/// One declared element of a public surface.
///
/// Nodes own their children directly; the tree is strict (no back-edges)
/// and immutable once built. `qualified_path` is precomputed at
/// construction so the engine never walks upward.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolNode {
    pub kind: SymbolKind,
    /// Simple identifier. Not unique among siblings: overloads share a name.
    pub name: String,
    /// Dot-separated logical path from the surface root. Constructors use
    /// the synthetic `ctor` segment; interface-implementation nodes use the
    /// interface's own full name.
    pub qualified_path: String,
    /// Present only for invocable kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<Signature>,
    /// Declared type of a property, field, or event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_descriptor: Option<String>,
    /// Generic parameter count, for methods and types.
    #[serde(default)]
    pub generic_arity: usize,
    /// Child declarations, in declared order.
    #[serde(default)]
    pub children: Vec<SymbolNode>,
}

impl SymbolNode {
    /// Create a leaf node with no signature, type, or children.
    pub fn new(
        kind: SymbolKind,
        name: impl Into<String>,
        qualified_path: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            qualified_path: qualified_path.into(),
            signature: None,
            type_descriptor: None,
            generic_arity: 0,
            children: Vec::new(),
        }
    }

    /// Direct children of one kind, in declared order.
    pub fn children_of_kind(&self, kind: SymbolKind) -> impl Iterator<Item = &SymbolNode> {
        self.children.iter().filter(move |c| c.kind == kind)
    }

    /// The coarse identity the ignore policy matches on: the qualified path
    /// with no signature or arity component.
    #[must_use]
    pub fn coarse_path(&self) -> &str {
        &self.qualified_path
    }

    /// Identity key used to match this node against a candidate in the
    /// other tree. `ordinal` is the node's position among siblings of the
    /// same kind; it only participates for generic parameters.
    #[must_use]
    pub fn identity_key(&self, ordinal: usize) -> IdentityKey<'_> {
        match self.kind {
            SymbolKind::Constructor | SymbolKind::Method => IdentityKey::Invocable {
                kind: self.kind,
                name: &self.name,
                signature: self.signature.as_ref(),
                generic_arity: self.generic_arity,
            },
            SymbolKind::GenericParameter => IdentityKey::Ordinal { position: ordinal },
            _ => IdentityKey::Named {
                kind: self.kind,
                name: &self.name,
            },
        }
    }

    /// Content hash over the whole subtree, for cheap identical-input
    /// checks.
    #[must_use]
    pub fn content_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Comparison key matching a node in one tree against a candidate in the
/// other. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityKey<'a> {
    /// Non-invocable kinds match on kind and name alone.
    Named { kind: SymbolKind, name: &'a str },
    /// Constructors and methods additionally match on signature and generic
    /// arity, so overloads and generic variants never match each other.
    Invocable {
        kind: SymbolKind,
        name: &'a str,
        signature: Option<&'a Signature>,
        generic_arity: usize,
    },
    /// Generic parameters match on ordinal position; their names are not
    /// part of the public contract.
    Ordinal { position: usize },
}
