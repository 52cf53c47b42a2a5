//! Symbol tree model: the declared public surface of one library version.
//!
//! A surface is a strict tree of [`SymbolNode`]s (assembly → namespaces →
//! types → members), produced by an external metadata-reading collaborator
//! or assembled in code with [`ApiBuilder`]. Trees are read-only inputs to
//! the diff engine; nothing in this crate mutates them after construction.

mod build;
mod symbol;

pub use build::{ApiBuilder, MethodBuilder, NamespaceBuilder, TypeBuilder, CTOR_SEGMENT};
pub use symbol::{IdentityKey, Signature, SymbolKind, SymbolNode};
