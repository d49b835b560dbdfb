//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid number of arguments: expected 1, got {got}")]
    ArgumentCount { got: usize },

    #[error("Invalid number '{0}'")]
    InvalidNumber(String),

    #[error("Credential cannot be empty")]
    EmptyCredential,

    #[error("Unexpected response from model: '{0}'")]
    MalformedAnswer(String),
}
