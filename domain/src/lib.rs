//! Domain layer for prime-checker
//!
//! This crate contains the value objects and pure validation logic.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Candidate**: the integer taken from the command line
//! - **Prompt**: the fixed instructional question built around it
//! - **Verdict**: the model's answer once normalized to `yes` / `no`

pub mod core;
pub mod prompt;
pub mod session;
pub mod verdict;

// Re-export commonly used types
pub use self::core::{
    candidate::Candidate, credential::Credential, error::DomainError, model::Model,
};
pub use prompt::PromptTemplate;
pub use session::response::{Completion, TokenUsage};
pub use verdict::{Verdict, normalize_answer};
