pub mod errors;
pub mod types;

pub use errors::{Error, Result};
pub use types::{Finding, RuleId, ScaleDimensions, ScaleMode, Severity, SourceLocation};
