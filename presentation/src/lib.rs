//! Presentation layer for prime-checker
//!
//! This crate contains the CLI definition and the console formatter.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::{ConsoleFormatter, USAGE};
