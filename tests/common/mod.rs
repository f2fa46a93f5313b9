#![allow(dead_code)]

use dpilint::{
    BaseRef, DeclaredType, Expr, Literal, MemberDecl, NamedType, NamespacePath, SourceLocation,
    Stmt, TypeTable,
};

pub const SETUP_METHOD: &str = "InitializeComponent";

pub fn toolkit_namespace() -> NamespacePath {
    NamespacePath::new(["System", "Windows", "Forms"])
}

/// Minimal slice of the WinForms base-type graph.
pub fn winforms_table() -> TypeTable {
    TypeTable::new()
        .with(NamedType::new(
            "Form",
            toolkit_namespace(),
            BaseRef::Named("System.Windows.Forms.ContainerControl".into()),
        ))
        .with(NamedType::new(
            "UserControl",
            toolkit_namespace(),
            BaseRef::Named("System.Windows.Forms.ContainerControl".into()),
        ))
        .with(NamedType::new(
            "ContainerControl",
            toolkit_namespace(),
            BaseRef::Named("System.Windows.Forms.Control".into()),
        ))
        .with(NamedType::new(
            "Control",
            toolkit_namespace(),
            BaseRef::ObjectRoot,
        ))
}

pub fn form_base() -> BaseRef {
    BaseRef::Named("System.Windows.Forms.Form".into())
}

pub fn user_control_base() -> BaseRef {
    BaseRef::Named("System.Windows.Forms.UserControl".into())
}

pub fn loc(file: &str, line: usize) -> SourceLocation {
    SourceLocation::new(file, line, 1)
}

/// `this.AutoScaleMode = AutoScaleMode.<tag>;`
pub fn mode_stmt(tag: &str) -> Stmt {
    Stmt::Expr(Expr::assign(
        Expr::member(Expr::ident("this"), "AutoScaleMode"),
        Expr::member(Expr::ident("AutoScaleMode"), tag),
    ))
}

/// `this.AutoScaleDimensions = new SizeF(<width>F, <height>F);`
pub fn dimensions_stmt(width: f32, height: f32) -> Stmt {
    Stmt::Expr(Expr::assign(
        Expr::member(Expr::ident("this"), "AutoScaleDimensions"),
        Expr::new_object(
            "SizeF",
            vec![
                Expr::Lit(Literal::Float(width)),
                Expr::Lit(Literal::Float(height)),
            ],
        ),
    ))
}

pub fn setup_member(line: usize, statements: Vec<Stmt>) -> MemberDecl {
    MemberDecl::new(
        SETUP_METHOD,
        loc("MainForm.Designer.cs", line),
        Some(statements),
    )
}

pub fn container_type(
    name: &str,
    base: BaseRef,
    locations: Vec<SourceLocation>,
    members: Vec<MemberDecl>,
) -> DeclaredType {
    DeclaredType {
        name: name.into(),
        namespace: NamespacePath::new(["App"]),
        base,
        locations,
        members,
    }
}

/// A `Form` subclass with one declaration site and one setup routine.
pub fn simple_form(name: &str, statements: Vec<Stmt>) -> DeclaredType {
    container_type(
        name,
        form_base(),
        vec![loc("MainForm.cs", 12)],
        vec![setup_member(30, statements)],
    )
}
