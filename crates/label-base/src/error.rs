use modeling_ops::OpError;

use crate::units::UnitError;

/// Errors from generating a label base.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerateError {
    #[error("invalid depth: {0}")]
    Units(#[from] UnitError),

    #[error("geometry failed: {0}")]
    Op(#[from] OpError),
}

/// Errors from loading a [`GeneratorConfig`](crate::GeneratorConfig).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(String),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid config field {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
