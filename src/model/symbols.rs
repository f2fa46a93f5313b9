//! Symbol model: named types, base-type links, and member declarations

use crate::core::SourceLocation;
use crate::model::syntax::Stmt;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Namespace path from the outermost segment inward. An empty path is
/// the global namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamespacePath(Vec<String>);

impl NamespacePath {
    pub fn global() -> Self {
        Self(Vec::new())
    }

    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_global(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NamespacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

/// Link from a type to its immediate base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseRef {
    /// Another named type, referenced by qualified name and resolved
    /// through the host's [`TypeResolver`]
    Named(String),
    /// The object root; the chain ends here
    ObjectRoot,
    /// No base information available (external or unresolved metadata)
    Missing,
}

/// A resolved named type somewhere in a base chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedType {
    pub name: String,
    pub namespace: NamespacePath,
    pub base: BaseRef,
}

impl NamedType {
    pub fn new(name: impl Into<String>, namespace: NamespacePath, base: BaseRef) -> Self {
        Self {
            name: name.into(),
            namespace,
            base,
        }
    }

    pub fn qualified_name(&self) -> String {
        if self.namespace.is_global() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

/// A member declaration of a declared type. Only the name, location,
/// and (optional) statement body are visible to the lint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDecl {
    pub name: String,
    pub location: SourceLocation,
    /// `None` for declarations without a body (abstract members,
    /// partial stubs)
    pub body: Option<Vec<Stmt>>,
}

impl MemberDecl {
    pub fn new(name: impl Into<String>, location: SourceLocation, body: Option<Vec<Stmt>>) -> Self {
        Self {
            name: name.into(),
            location,
            body,
        }
    }
}

/// A type definition under analysis, supplied by the host per
/// compilation unit. Partial declarations contribute one location
/// each; members are gathered across all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclaredType {
    pub name: String,
    pub namespace: NamespacePath,
    pub base: BaseRef,
    /// One location per (partial) declaration site
    pub locations: Vec<SourceLocation>,
    pub members: Vec<MemberDecl>,
}

/// The abstract "resolve base" capability the base-chain walk runs
/// over. Returning `None` for a name the resolver does not know is the
/// expected way to surface external metadata; it terminates the walk.
pub trait TypeResolver: Send + Sync {
    fn resolve(&self, qualified_name: &str) -> Option<&NamedType>;
}

/// Map-backed resolver keyed by qualified name.
#[derive(Debug, Clone, Default)]
pub struct TypeTable {
    types: HashMap<String, NamedType>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ty: NamedType) {
        self.types.insert(ty.qualified_name(), ty);
    }

    pub fn with(mut self, ty: NamedType) -> Self {
        self.insert(ty);
        self
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeResolver for TypeTable {
    fn resolve(&self, qualified_name: &str) -> Option<&NamedType> {
        self.types.get(qualified_name)
    }
}
