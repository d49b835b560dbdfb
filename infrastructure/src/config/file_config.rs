//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML settings file.
//! They are deserialized directly and use domain types where appropriate.

use primecheck_application::config::{CheckParams, DEFAULT_CREDENTIAL_VAR, DEFAULT_TIMEOUT_VAR};
use primecheck_domain::Model;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("provider.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("provider.{0} cannot be empty")]
    EmptyVariableName(&'static str),
}

/// Raw provider configuration from TOML (`[provider]` section)
///
/// Only the endpoint, the model and the variable names are configurable.
/// The token cap and temperature are fixed by [`CheckParams`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Root of an OpenAI-compatible API (default: "https://api.openai.com").
    pub base_url: String,
    /// Chat model to ask.
    pub model: Model,
    /// Environment variable holding the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Environment variable holding the timeout in seconds
    /// (default: "MAX_TIMEOUT_SECONDS").
    pub timeout_env: String,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            model: Model::default(),
            api_key_env: DEFAULT_CREDENTIAL_VAR.to_string(),
            timeout_env: DEFAULT_TIMEOUT_VAR.to_string(),
        }
    }
}

/// Complete settings file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub provider: FileProviderConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let provider = &self.provider;

        if provider.base_url.trim().is_empty() {
            return Err(ConfigValidationError::EmptyBaseUrl);
        }

        if provider.api_key_env.trim().is_empty() {
            return Err(ConfigValidationError::EmptyVariableName("api_key_env"));
        }

        if provider.timeout_env.trim().is_empty() {
            return Err(ConfigValidationError::EmptyVariableName("timeout_env"));
        }

        Ok(())
    }

    /// Request parameters described by this file.
    ///
    /// The timeout is left at its default; it comes from the environment.
    pub fn check_params(&self) -> CheckParams {
        CheckParams::default().with_model(self.provider.model.clone())
    }
}
