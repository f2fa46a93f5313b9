//! The DPI-scale analysis pipeline
//!
//! Classification gates entry; the locator feeds the extractor, the
//! extractor feeds the normalizer, and the normalized values plus the
//! project default drive the evaluator. Each declared type is analyzed
//! independently with no shared mutable state, so the host may run
//! many analyses in parallel.

pub mod classifier;
pub mod evaluator;
pub mod extractor;
pub mod locator;
pub mod normalizer;

use crate::config::AnalyzerOptions;
use crate::core::Finding;
use crate::model::{DeclaredType, TypeResolver};
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};

/// Read-only snapshot of everything the host supplies: base-type
/// resolution, the analyzer-options surface, and an optional
/// cancellation flag checked between type analyses.
#[derive(Clone, Copy)]
pub struct AnalysisContext<'a> {
    pub resolver: &'a dyn TypeResolver,
    pub options: &'a AnalyzerOptions,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(resolver: &'a dyn TypeResolver, options: &'a AnalyzerOptions) -> Self {
        Self {
            resolver,
            options,
            cancel: None,
        }
    }

    pub fn with_cancellation(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.map_or(false, |flag| flag.load(Ordering::Relaxed))
    }
}

/// Analyzes one declared type, yielding one finding per declaration
/// site for each rule that fires in each of its setup routines.
///
/// Total over its input: malformed shapes narrow what can fire, they
/// never error.
pub fn analyze_type(ctx: &AnalysisContext<'_>, ty: &DeclaredType) -> Vec<Finding> {
    if !classifier::is_scalable_container(ty, ctx.resolver) {
        return Vec::new();
    }

    log::debug!("analyzing scalable container `{}`", ty.name);

    let project_default = ctx.options.auto_scale_mode_default();
    let mut findings = Vec::new();

    for routine in locator::locate(ty) {
        let assignments = extractor::extract(routine.statements);
        let mode = assignments.mode.and_then(normalizer::normalize_mode);
        let dimensions = assignments
            .dimensions
            .and_then(normalizer::normalize_dimensions);

        for issue in evaluator::evaluate(mode, dimensions, project_default) {
            log::debug!("`{}`: rule {:?} fired", ty.name, issue.rule);
            for location in &ty.locations {
                let mut finding = Finding::new(issue.rule, location.clone());
                finding.param = issue.param.clone();
                findings.push(finding);
            }
        }
    }

    findings
}

/// Analyzes every type of a compilation in parallel. Cancellation is
/// coarse-grained: the flag is consulted before each type, never
/// mid-routine.
pub fn analyze_compilation(ctx: &AnalysisContext<'_>, types: &[DeclaredType]) -> Vec<Finding> {
    types
        .par_iter()
        .flat_map(|ty| {
            if ctx.is_cancelled() {
                Vec::new()
            } else {
                analyze_type(ctx, ty)
            }
        })
        .collect()
}
