//! LLM Session domain.
//!
//! - [`response::Completion`] — raw text returned for one prompt
//! - [`response::TokenUsage`] — token accounting for diagnostics

pub mod response;
