//! Analyzer options supplied by the host's build configuration

use crate::core::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known key carrying the project-wide default scale mode.
pub const AUTO_SCALE_MODE_KEY: &str = "build_property.WindowsFormsAutoScaleMode";

/// Read-only key/value configuration surface. Hosts populate it from
/// their build-property store; standalone runs can deserialize it from
/// a TOML table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzerOptions {
    #[serde(flatten)]
    values: BTreeMap<String, String>,
}

impl AnalyzerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The project's declared default scale mode, verbatim. Absent if
    /// the project does not set one.
    pub fn auto_scale_mode_default(&self) -> Option<&str> {
        self.get(AUTO_SCALE_MODE_KEY)
    }

    /// Parses options from a TOML table of string values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options = toml::from_str(content)?;
        Ok(options)
    }
}
