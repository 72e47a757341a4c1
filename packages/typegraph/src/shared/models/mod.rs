//! Shared models

pub mod error;
pub mod span;

pub use error::{ErrorKind, Result, TypeGraphError};
pub use span::Span;
