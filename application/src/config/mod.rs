//! Application-level configuration.
//!
//! - [`CheckParams`] — model, token cap, temperature and deadline
//! - [`Environment`] — credential and timeout values taken from the environment

pub mod check_params;
pub mod environment;

pub use check_params::{CheckParams, DEFAULT_MAX_TOKENS, DEFAULT_TIMEOUT};
pub use environment::{
    ConfigurationError, DEFAULT_CREDENTIAL_VAR, DEFAULT_TIMEOUT_VAR, Environment,
};
