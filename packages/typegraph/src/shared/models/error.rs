//! Error types for the typegraph crate
//!
//! Failures only come from the collaborators around the model: the file
//! walker, file reads, the parser and configuration. Degenerate declaration
//! graphs never error. The collaborator's own error is kept as `source`.

use std::fmt;
use std::path::Path;

/// Scan stage that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Parser failure, or syntax errors in strict mode
    Parse,
    /// Directory enumeration
    Discovery,
    /// File read
    IO,
    Config,
    /// Bugs
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Parse => "parse",
            ErrorKind::Discovery => "discovery",
            ErrorKind::IO => "io",
            ErrorKind::Config => "config",
            ErrorKind::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Crate error with optional file/line context
#[derive(Debug)]
pub struct TypeGraphError {
    pub kind: ErrorKind,
    pub message: String,
    pub file_path: Option<String>,
    pub line: Option<u32>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TypeGraphError>;

impl TypeGraphError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            file_path: None,
            line: None,
            source: None,
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    pub fn discovery(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Discovery, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IO, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    pub fn with_file(mut self, file_path: impl AsRef<Path>) -> Self {
        self.file_path = Some(file_path.as_ref().display().to_string());
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for TypeGraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        match (&self.file_path, self.line) {
            (Some(file), Some(line)) => write!(f, " in {}:{}", file, line),
            (Some(file), None) => write!(f, " in {}", file),
            _ => Ok(()),
        }
    }
}

impl std::error::Error for TypeGraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn std::error::Error + 'static))
    }
}

impl From<serde_json::Error> for TypeGraphError {
    fn from(err: serde_json::Error) -> Self {
        TypeGraphError::internal(format!("JSON serialization error: {}", err)).with_source(err)
    }
}
