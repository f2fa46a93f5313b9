//! Host-facing data model
//!
//! The host hands the lint a read-only snapshot of declared types,
//! their base-type links, and the statement shapes of their generated
//! setup routines. Nothing here parses source text.

pub mod symbols;
pub mod syntax;

pub use symbols::{BaseRef, DeclaredType, MemberDecl, NamedType, NamespacePath, TypeResolver, TypeTable};
pub use syntax::{Expr, Literal, Stmt};
