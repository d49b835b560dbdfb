//! LLM Gateway port
//!
//! Defines the interface for asking a chat-completion provider one question.

use async_trait::async_trait;
use primecheck_domain::{Completion, Credential, Model};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error("HTTP {status}: {message}")]
    Upstream { status: u16, message: String },

    /// Error object delivered with a success status.
    #[error("{0}")]
    ErrorPayload(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Response contained no choices")]
    EmptyResponse,
}

impl GatewayError {
    /// Whether the failure happened below the application protocol:
    /// the request never completed (connect failure, deadline exceeded).
    ///
    /// Everything else means the endpoint answered but not usefully.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            GatewayError::ConnectionError(_) | GatewayError::Timeout(_)
        )
    }
}

/// A single completion request.
///
/// Carries everything the provider needs for one stateless call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub prompt: String,
    pub credential: Credential,
    pub model: Model,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Upper bound for the whole exchange.
    pub timeout: Duration,
}

/// Gateway for LLM communication
///
/// This port defines how the application layer talks to a completion
/// provider. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send one prompt and return the first choice's raw text.
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError>;
}
