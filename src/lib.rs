// Export modules for library usage
pub mod analyzers;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod io;
pub mod model;

// Re-export commonly used types
pub use crate::core::{
    Error, Finding, Result, RuleId, ScaleDimensions, ScaleMode, Severity, SourceLocation,
};

pub use crate::model::{
    BaseRef, DeclaredType, Expr, Literal, MemberDecl, NamedType, NamespacePath, Stmt,
    TypeResolver, TypeTable,
};

pub use crate::analyzers::{analyze_compilation, analyze_type, AnalysisContext};

pub use crate::config::{AnalyzerOptions, AUTO_SCALE_MODE_KEY};

pub use crate::diagnostics::{
    descriptor, render, report_findings, supported_rules, Diagnostic, DiagnosticSink,
    RuleDescriptor,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
