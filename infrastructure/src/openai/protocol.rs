//! Wire types for the OpenAI-compatible chat completions API.
//!
//! Only the fields this client sends or reads are modelled; unknown
//! response fields are ignored.

use primecheck_application::CompletionRequest;
use primecheck_domain::{Completion, TokenUsage};
use serde::{Deserialize, Serialize};

/// Path of the chat completions endpoint below the API root.
pub const CHAT_COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for `POST /v1/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl From<&CompletionRequest> for ChatCompletionRequest {
    fn from(request: &CompletionRequest) -> Self {
        Self {
            model: request.model.to_string(),
            messages: vec![ChatMessage::user(request.prompt.clone())],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct Usage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

impl From<Usage> for TokenUsage {
    fn from(usage: Usage) -> Self {
        TokenUsage {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        }
    }
}

/// Successful response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Usage,
}

impl ChatCompletionResponse {
    /// Convert to a [`Completion`] using the first choice.
    ///
    /// Returns `None` when the response carries no choices.
    pub fn into_completion(self) -> Option<Completion> {
        let choice = self.choices.into_iter().next()?;
        let mut completion = Completion::new(choice.message.content.unwrap_or_default())
            .with_usage(self.usage.into());
        completion.model = self.model;
        Some(completion)
    }
}

/// Error body: `{"error": {"message": ..., "type": ..., "code": ...}}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiError,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}

impl ApiError {
    /// Human-readable summary including the error type when present.
    pub fn summary(&self) -> String {
        match &self.kind {
            Some(kind) if !kind.is_empty() => format!("{} ({})", self.message, kind),
            _ => self.message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primecheck_domain::{Credential, Model};
    use std::time::Duration;

    #[test]
    fn test_request_body_shape() {
        let request = CompletionRequest {
            prompt: "Is 7 prime?".to_string(),
            credential: Credential::new("sk-test").unwrap(),
            model: Model::Gpt35Turbo,
            max_tokens: 5,
            temperature: 0.0,
            timeout: Duration::from_secs(30),
        };

        let body = serde_json::to_value(ChatCompletionRequest::from(&request)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "model": "gpt-3.5-turbo",
                "messages": [{"role": "user", "content": "Is 7 prime?"}],
                "max_tokens": 5,
                "temperature": 0.0
            })
        );
    }

    #[test]
    fn test_response_first_choice_and_usage() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "model": "gpt-3.5-turbo-0125",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Yes"}, "finish_reason": "stop"},
                {"index": 1, "message": {"role": "assistant", "content": "No"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 96, "completion_tokens": 1, "total_tokens": 97}
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        let completion = response.into_completion().unwrap();

        assert_eq!(completion.text, "Yes");
        assert_eq!(completion.usage.total_tokens, 97);
        assert_eq!(completion.model.as_deref(), Some("gpt-3.5-turbo-0125"));
    }

    #[test]
    fn test_response_without_choices() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(response.into_completion().is_none());
    }

    #[test]
    fn test_null_content_becomes_empty_text() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_completion().unwrap().text, "");
    }

    #[test]
    fn test_error_envelope() {
        let json = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error", "code": "invalid_api_key"}}"#;
        let envelope: ErrorEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.error.summary(),
            "Incorrect API key provided (invalid_request_error)"
        );
        assert_eq!(
            envelope.error.code,
            Some(serde_json::json!("invalid_api_key"))
        );
    }
}
