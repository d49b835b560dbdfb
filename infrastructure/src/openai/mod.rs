//! OpenAI-compatible chat completions adapter.
//!
//! - [`gateway::OpenAiLlmGateway`] — implements the `LlmGateway` port over HTTPS
//! - [`protocol`] — request and response bodies

pub mod gateway;
pub mod protocol;
