//! Completion response types.
//!
//! A [`Completion`] is what a chat-completion endpoint hands back for a
//! single prompt: the raw text of the first choice plus token accounting.
//! The text is not yet validated; see [`Verdict`](crate::verdict::Verdict).

use serde::{Deserialize, Serialize};

/// Token accounting reported by the endpoint.
///
/// Only used for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

/// Raw result of a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Text content of the first returned choice, untouched.
    pub text: String,
    #[serde(default)]
    pub usage: TokenUsage,
    /// Model name as reported by the endpoint.
    #[serde(default)]
    pub model: Option<String>,
}

impl Completion {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: TokenUsage::default(),
            model: None,
        }
    }

    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.usage = usage;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}
