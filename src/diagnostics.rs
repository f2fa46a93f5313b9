//! Rule descriptors and diagnostic hand-off to the host

use crate::core::{Finding, RuleId, Severity, SourceLocation};
use serde::Serialize;

/// Static metadata for one lint rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    /// Message template; `{0}` is replaced by the finding's parameter.
    pub message: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub enabled_by_default: bool,
}

pub const DESIGN_DPI_DRIFT: RuleDescriptor = RuleDescriptor {
    id: "DPILINT0001",
    title: "The form design has been saved with settings for environments where the DPI scale is not 100%",
    message: "The form design has been saved with settings for environments where the DPI scale is not 100%",
    category: "Usage",
    severity: Severity::Warning,
    enabled_by_default: true,
};

pub const PROJECT_DEFAULT_CONFLICT: RuleDescriptor = RuleDescriptor {
    id: "DPILINT0002",
    title: "AutoScaleMode does not match the project default scale mode",
    message: "The AutoScaleMode of this type differs from the value specified in the project. The project's default value is \"{0}\".",
    category: "Usage",
    severity: Severity::Warning,
    enabled_by_default: true,
};

pub fn descriptor(rule: RuleId) -> &'static RuleDescriptor {
    match rule {
        RuleId::DesignDpiDrift => &DESIGN_DPI_DRIFT,
        RuleId::ProjectDefaultConflict => &PROJECT_DEFAULT_CONFLICT,
    }
}

/// Every rule this analyzer can raise, for host registration.
pub fn supported_rules() -> [&'static RuleDescriptor; 2] {
    [&DESIGN_DPI_DRIFT, &PROJECT_DEFAULT_CONFLICT]
}

/// A rendered diagnostic record, ready for the host's sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub id: &'static str,
    pub severity: Severity,
    pub message: String,
    pub location: SourceLocation,
}

/// Formats a finding against its rule's descriptor.
pub fn render(finding: &Finding) -> Diagnostic {
    let desc = descriptor(finding.rule);
    let message = match &finding.param {
        Some(param) => desc.message.replace("{0}", param),
        None => desc.message.to_string(),
    };
    Diagnostic {
        id: desc.id,
        severity: desc.severity,
        message,
        location: finding.location.clone(),
    }
}

/// Host-side receiver for rendered diagnostics. Reporting is a pure
/// hand-off and never fails the analysis.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

pub fn report_findings(findings: &[Finding], sink: &mut dyn DiagnosticSink) {
    for finding in findings {
        sink.report(render(finding));
    }
}
