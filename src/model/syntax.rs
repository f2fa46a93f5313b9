//! Statement and expression shapes of generated setup routines
//!
//! Deliberately minimal: only the shapes the lint inspects are
//! distinguished. Everything else collapses into [`Expr::Opaque`] /
//! [`Stmt::Other`], which the pipeline skips over without error.

use serde::{Deserialize, Serialize};

/// Literal value on the right-hand side of a designer assignment.
/// Numeric kinds keep their originating precision so conversion can be
/// decided per kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Int(i64),
    Float(f32),
    Double(f64),
    Str(String),
    Bool(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// `target = value`
    Assign { target: Box<Expr>, value: Box<Expr> },
    /// `receiver.name`
    Member { receiver: Box<Expr>, name: String },
    /// `new TypeName(args...)`
    New { type_name: String, args: Vec<Expr> },
    Lit(Literal),
    Ident(String),
    /// Any expression shape the lint does not inspect
    Opaque,
}

impl Expr {
    pub fn assign(target: Expr, value: Expr) -> Expr {
        Expr::Assign {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    pub fn member(receiver: Expr, name: impl Into<String>) -> Expr {
        Expr::Member {
            receiver: Box::new(receiver),
            name: name.into(),
        }
    }

    pub fn new_object(type_name: impl Into<String>, args: Vec<Expr>) -> Expr {
        Expr::New {
            type_name: type_name.into(),
            args,
        }
    }

    pub fn ident(name: impl Into<String>) -> Expr {
        Expr::Ident(name.into())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// An expression statement
    Expr(Expr),
    /// Any other statement kind (declarations, control flow, nested
    /// blocks); never descended into
    Other,
}
