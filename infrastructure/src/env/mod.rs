//! Process environment access.
//!
//! - [`load_dotenv`] — populate the environment from a `.env` file
//! - [`read_environment`] — snapshot the credential and timeout variables

use primecheck_application::{ConfigurationError, Environment};
use std::env::VarError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of trying to load a `.env` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DotenvStatus {
    /// The file was found and its variables applied.
    Loaded(PathBuf),
    /// No file, or it could not be parsed. Not fatal.
    Unavailable(String),
}

impl DotenvStatus {
    pub fn is_loaded(&self) -> bool {
        matches!(self, DotenvStatus::Loaded(_))
    }
}

/// Load variables from a `.env` file into the process environment.
///
/// With no explicit path, `.env` is searched for from the current
/// directory upwards. Variables already present in the environment
/// are never overridden.
pub fn load_dotenv(path: Option<&Path>) -> DotenvStatus {
    debug!("Attempting to load .env file");
    let result = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match result {
        Ok(path) => {
            info!(".env file loaded successfully from {}", path.display());
            DotenvStatus::Loaded(path)
        }
        Err(e) => {
            info!(".env file not found or could not be loaded: {}", e);
            DotenvStatus::Unavailable(e.to_string())
        }
    }
}

/// Read the named credential and timeout variables.
///
/// A credential that is set but not valid unicode is an error rather
/// than "not set". A non-unicode timeout is treated as absent, so the
/// default deadline applies.
pub fn read_environment(
    credential_var: &str,
    timeout_var: &str,
) -> Result<Environment, ConfigurationError> {
    let credential = match std::env::var(credential_var) {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => {
            return Err(ConfigurationError::NonUnicodeCredential {
                var: credential_var.to_string(),
            });
        }
    };

    let timeout = match std::env::var(timeout_var) {
        Ok(value) => Some(value),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(_)) => {
            debug!("{} is not valid unicode, ignoring it", timeout_var);
            None
        }
    };

    Ok(Environment {
        credential_var: credential_var.to_string(),
        credential,
        timeout_var: timeout_var.to_string(),
        timeout,
    })
}
