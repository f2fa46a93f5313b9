//! Common type definitions used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Severity levels for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Location in source code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: PathBuf,
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

/// Declared strategy for adapting a container's layout to display scale
/// factors. Only the two strategies the lint reasons about are modeled;
/// any other tag on the designer assignment is treated as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScaleMode {
    /// Scaling proportional to a reference font size
    Font,
    /// Scaling proportional to a reference pixel density
    Dpi,
}

impl ScaleMode {
    /// Map the simple name from a designer assignment to a recognized
    /// mode, if it is one.
    pub fn recognize(name: &str) -> Option<Self> {
        match name {
            "Font" => Some(ScaleMode::Font),
            "Dpi" => Some(ScaleMode::Dpi),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScaleMode::Font => "Font",
            ScaleMode::Dpi => "Dpi",
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference (width, height) pair captured at design time.
///
/// Comparison against the per-mode baselines is exact; the pair carries
/// whatever unit the designer wrote and no conversion is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleDimensions {
    pub width: f32,
    pub height: f32,
}

impl ScaleDimensions {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Stable identifiers for the two lint rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    /// Saved scale dimensions deviate from the baseline for the
    /// declared scale mode
    DesignDpiDrift,
    /// Declared scale mode conflicts with the project-wide default
    ProjectDefaultConflict,
}

/// One raised issue, anchored at a single declaration site of the
/// offending type. A type with several partial declarations yields one
/// finding per site for each rule that fires.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub rule: RuleId,
    pub location: SourceLocation,
    /// Message parameter for rules with a parameterized template; the
    /// project-default rule carries the raw configured value here.
    pub param: Option<String>,
}

impl Finding {
    pub fn new(rule: RuleId, location: SourceLocation) -> Self {
        Self {
            rule,
            location,
            param: None,
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.param = Some(param.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognize_accepts_only_known_modes() {
        assert_eq!(ScaleMode::recognize("Font"), Some(ScaleMode::Font));
        assert_eq!(ScaleMode::recognize("Dpi"), Some(ScaleMode::Dpi));
        assert_eq!(ScaleMode::recognize("Inherit"), None);
        assert_eq!(ScaleMode::recognize("font"), None);
        assert_eq!(ScaleMode::recognize(""), None);
    }

    #[test]
    fn dimensions_compare_exactly() {
        assert_eq!(ScaleDimensions::new(6.0, 12.0), ScaleDimensions::new(6.0, 12.0));
        assert_ne!(ScaleDimensions::new(6.0, 12.0), ScaleDimensions::new(6.0, 13.0));
    }
}
