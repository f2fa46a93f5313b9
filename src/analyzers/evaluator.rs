//! Decision table over the normalized scale configuration

use crate::core::{RuleId, ScaleDimensions, ScaleMode};

/// Baseline the designer writes for font-relative scaling at 100%.
pub const FONT_BASELINE: ScaleDimensions = ScaleDimensions {
    width: 6.0,
    height: 12.0,
};

/// Baseline the designer writes for density-relative scaling at 100%.
pub const DPI_BASELINE: ScaleDimensions = ScaleDimensions {
    width: 96.0,
    height: 96.0,
};

/// A rule that fired for one setup routine, before fan-out to the
/// type's declaration sites.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleIssue {
    pub rule: RuleId,
    pub param: Option<String>,
}

/// Applies both rules independently; either, both, or neither may
/// fire. Absent inputs silence the rules that need them.
pub fn evaluate(
    mode: Option<ScaleMode>,
    dimensions: Option<ScaleDimensions>,
    project_default: Option<&str>,
) -> Vec<ScaleIssue> {
    let mut issues = Vec::new();

    if let (Some(mode), Some(dimensions)) = (mode, dimensions) {
        let baseline = match mode {
            ScaleMode::Font => FONT_BASELINE,
            ScaleMode::Dpi => DPI_BASELINE,
        };
        if dimensions != baseline {
            issues.push(ScaleIssue {
                rule: RuleId::DesignDpiDrift,
                param: None,
            });
        }
    }

    if let (Some(default), Some(mode)) = (project_default, mode) {
        // Fires when the declared mode equals the configured default,
        // keeping the rule's historical direction; see DESIGN.md. The
        // comparison trims the configured value and ignores case, but
        // the message parameter carries it verbatim.
        if default.trim().eq_ignore_ascii_case(mode.as_str()) {
            issues.push(ScaleIssue {
                rule: RuleId::ProjectDefaultConflict,
                param: Some(default.to_string()),
            });
        }
    }

    issues
}
