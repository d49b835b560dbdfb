//! Environment snapshot consumed by the invocation use case.
//!
//! Reading the process environment is an infrastructure concern; the
//! use case only sees the values that were present when it started.

use thiserror::Error;

/// Default name of the credential variable.
pub const DEFAULT_CREDENTIAL_VAR: &str = "OPENAI_API_KEY";

/// Default name of the timeout-in-seconds variable.
pub const DEFAULT_TIMEOUT_VAR: &str = "MAX_TIMEOUT_SECONDS";

/// Errors in configuration gathering
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("{var} environment variable not set")]
    MissingCredential { var: String },

    #[error("{var} environment variable is not valid unicode")]
    NonUnicodeCredential { var: String },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

/// Values read from the environment for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Name of the variable the credential was read from.
    pub credential_var: String,
    pub credential: Option<String>,
    /// Name of the variable the timeout was read from.
    pub timeout_var: String,
    pub timeout: Option<String>,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            credential_var: DEFAULT_CREDENTIAL_VAR.to_string(),
            credential: None,
            timeout_var: DEFAULT_TIMEOUT_VAR.to_string(),
            timeout: None,
        }
    }
}

impl Environment {
    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    pub fn with_timeout(mut self, timeout: impl Into<String>) -> Self {
        self.timeout = Some(timeout.into());
        self
    }
}
