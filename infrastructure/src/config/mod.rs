//! Settings file loading for prime-checker
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./prime-checker.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/prime-checker/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileProviderConfig};
pub use loader::ConfigLoader;
