//! Fluent construction of symbol trees.
//!
//! Hosts with a real metadata reader materialize [`SymbolNode`] trees
//! through these builders; the crate's own tests use them to describe
//! surfaces inline. Qualified paths are computed here, at construction,
//! so the engine never has to walk upward.

use super::{Signature, SymbolKind, SymbolNode};

/// Synthetic path segment for constructors, which have no name of their
/// own. Part of the external ignore-path contract: `"A.C.ctor"` must keep
/// matching across engine versions.
pub const CTOR_SEGMENT: &str = "ctor";

/// Builder for one library version's surface. The finished tree is rooted
/// at an [`SymbolKind::Assembly`] node.
#[derive(Debug)]
#[must_use]
pub struct ApiBuilder {
    root: SymbolNode,
}

impl ApiBuilder {
    /// Start a surface for the named assembly.
    pub fn new(assembly_name: impl Into<String>) -> Self {
        let name = assembly_name.into();
        Self {
            root: SymbolNode::new(SymbolKind::Assembly, name.clone(), name),
        }
    }

    /// Declare a namespace. Namespace names may themselves be dotted
    /// (`"System.Collections"` is one namespace node).
    pub fn namespace(
        mut self,
        name: &str,
        f: impl FnOnce(NamespaceBuilder) -> NamespaceBuilder,
    ) -> Self {
        let ns = f(NamespaceBuilder::new(name));
        self.root.children.push(ns.node);
        self
    }

    /// Finish the tree.
    pub fn build(self) -> SymbolNode {
        self.root
    }
}

/// Builder for the types declared in one namespace.
#[derive(Debug)]
#[must_use]
pub struct NamespaceBuilder {
    node: SymbolNode,
}

impl NamespaceBuilder {
    fn new(name: &str) -> Self {
        // A namespace's qualified path is its own (possibly dotted) name.
        Self {
            node: SymbolNode::new(SymbolKind::Namespace, name, name),
        }
    }

    /// Declare a type in this namespace.
    pub fn class(mut self, name: &str, f: impl FnOnce(TypeBuilder) -> TypeBuilder) -> Self {
        let ty = f(TypeBuilder::new(&self.node.qualified_path, name));
        self.node.children.push(ty.node);
        self
    }
}

/// Builder for the members of one type.
#[derive(Debug)]
#[must_use]
pub struct TypeBuilder {
    node: SymbolNode,
}

impl TypeBuilder {
    fn new(parent_path: &str, name: &str) -> Self {
        Self {
            node: SymbolNode::new(SymbolKind::Type, name, format!("{parent_path}.{name}")),
        }
    }

    /// Declare an implemented interface by its full name. The node's path
    /// is the interface's own name, which is what ignore entries such as
    /// `"System.IDisposable"` match against.
    pub fn implements(mut self, interface_full_name: &str) -> Self {
        self.node.children.push(SymbolNode::new(
            SymbolKind::Interface,
            interface_full_name,
            interface_full_name,
        ));
        self
    }

    /// Declare a constructor.
    pub fn constructor(mut self, f: impl FnOnce(MethodBuilder) -> MethodBuilder) -> Self {
        let ctor = f(MethodBuilder::new(
            SymbolKind::Constructor,
            &self.node.qualified_path,
            CTOR_SEGMENT,
        ));
        self.node.children.push(ctor.finish());
        self
    }

    /// Declare a method.
    pub fn method(mut self, name: &str, f: impl FnOnce(MethodBuilder) -> MethodBuilder) -> Self {
        let method = f(MethodBuilder::new(
            SymbolKind::Method,
            &self.node.qualified_path,
            name,
        ));
        self.node.children.push(method.finish());
        self
    }

    /// Declare a property of the given type.
    pub fn property(self, name: &str, type_name: &str) -> Self {
        self.member(SymbolKind::Property, name, type_name)
    }

    /// Declare a field of the given type.
    pub fn field(self, name: &str, type_name: &str) -> Self {
        self.member(SymbolKind::Field, name, type_name)
    }

    /// Declare an event of the given handler type.
    pub fn event(self, name: &str, type_name: &str) -> Self {
        self.member(SymbolKind::Event, name, type_name)
    }

    /// Declare a generic parameter on the type.
    pub fn generic_parameter(mut self, name: &str) -> Self {
        let path = format!("{}.{name}", self.node.qualified_path);
        self.node
            .children
            .push(SymbolNode::new(SymbolKind::GenericParameter, name, path));
        self.node.generic_arity += 1;
        self
    }

    /// Declare a nested type.
    pub fn nested_class(mut self, name: &str, f: impl FnOnce(TypeBuilder) -> TypeBuilder) -> Self {
        let nested = f(TypeBuilder::new(&self.node.qualified_path, name));
        self.node.children.push(nested.node);
        self
    }

    fn member(mut self, kind: SymbolKind, name: &str, type_name: &str) -> Self {
        let path = format!("{}.{name}", self.node.qualified_path);
        let mut node = SymbolNode::new(kind, name, path);
        node.type_descriptor = Some(type_name.to_string());
        self.node.children.push(node);
        self
    }
}

/// Builder for one constructor or method declaration.
#[derive(Debug)]
#[must_use]
pub struct MethodBuilder {
    node: SymbolNode,
    parameters: Vec<String>,
    return_type: Option<String>,
}

impl MethodBuilder {
    fn new(kind: SymbolKind, parent_path: &str, name: &str) -> Self {
        Self {
            node: SymbolNode::new(kind, name, format!("{parent_path}.{name}")),
            parameters: Vec::new(),
            return_type: None,
        }
    }

    /// Append a positional parameter of the given type.
    pub fn parameter(mut self, type_name: &str) -> Self {
        self.parameters.push(type_name.to_string());
        self
    }

    /// Set the return type (methods only; constructors have none).
    pub fn returns(mut self, type_name: &str) -> Self {
        self.return_type = Some(type_name.to_string());
        self
    }

    /// Declare a generic parameter on the method.
    pub fn generic_parameter(mut self, name: &str) -> Self {
        let path = format!("{}.{name}", self.node.qualified_path);
        self.node
            .children
            .push(SymbolNode::new(SymbolKind::GenericParameter, name, path));
        self.node.generic_arity += 1;
        self
    }

    fn finish(mut self) -> SymbolNode {
        self.node.signature = Some(Signature::new(self.parameters, self.return_type));
        self.node
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_paths() {
        let surface = ApiBuilder::new("Lib")
            .namespace("A", |ns| {
                ns.class("C", |t| {
                    t.constructor(|c| c.parameter("System.Int32"))
                        .method("M", |m| m.returns("System.Void"))
                        .property("P", "System.Int32")
                        .nested_class("N", |n| n)
                })
            })
            .build();

        let ns = &surface.children[0];
        assert_eq!(ns.qualified_path, "A");
        let ty = &ns.children[0];
        assert_eq!(ty.qualified_path, "A.C");

        let paths: Vec<&str> = ty
            .children
            .iter()
            .map(|c| c.qualified_path.as_str())
            .collect();
        assert_eq!(paths, vec!["A.C.ctor", "A.C.M", "A.C.P", "A.C.N"]);
    }

    #[test]
    fn test_interface_path_is_its_own_name() {
        let surface = ApiBuilder::new("Lib")
            .namespace("A", |ns| {
                ns.class("C", |t| t.implements("System.IDisposable"))
            })
            .build();

        let iface = &surface.children[0].children[0].children[0];
        assert_eq!(iface.kind, SymbolKind::Interface);
        assert_eq!(iface.qualified_path, "System.IDisposable");
    }

    #[test]
    fn test_generic_parameters_raise_arity() {
        let surface = ApiBuilder::new("Lib")
            .namespace("A", |ns| {
                ns.class("C", |t| {
                    t.generic_parameter("T")
                        .method("M", |m| m.generic_parameter("T"))
                })
            })
            .build();

        let ty = &surface.children[0].children[0];
        assert_eq!(ty.generic_arity, 1);
        let method = ty
            .children_of_kind(SymbolKind::Method)
            .next()
            .expect("method declared");
        assert_eq!(method.generic_arity, 1);
        assert_eq!(method.children_of_kind(SymbolKind::GenericParameter).count(), 1);
    }
}
