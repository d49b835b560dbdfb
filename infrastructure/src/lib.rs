//! Infrastructure layer for prime-checker
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus settings-file and environment loading.

pub mod config;
pub mod env;
pub mod openai;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig, FileProviderConfig};
pub use env::{DotenvStatus, load_dotenv, read_environment};
pub use openai::gateway::OpenAiLlmGateway;
