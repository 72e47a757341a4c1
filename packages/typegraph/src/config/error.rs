//! Configuration error types

use thiserror::Error;

use crate::features::parsing::domain::UnknownLanguageVersion;
use crate::shared::models::TypeGraphError;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Unknown language version name
    #[error("{0}. Valid versions: es3, es5, es2015..es2022, esnext, latest")]
    UnknownLanguageVersion(#[from] UnknownLanguageVersion),

    /// Field value rejected by validation
    #[error("Invalid value for field '{field}': {hint}")]
    InvalidValue { field: String, hint: String },
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    pub fn invalid_value(field: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            hint: hint.into(),
        }
    }
}

impl From<ConfigError> for TypeGraphError {
    fn from(err: ConfigError) -> Self {
        TypeGraphError::config(err.to_string()).with_source(err)
    }
}
