//! OpenAI-compatible implementation of the LlmGateway port

use super::protocol::{
    CHAT_COMPLETIONS_PATH, ChatCompletionRequest, ChatCompletionResponse, ErrorEnvelope,
};
use async_trait::async_trait;
use primecheck_application::{CompletionRequest, GatewayError, LlmGateway};
use primecheck_domain::Completion;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("prime-checker/", env!("CARGO_PKG_VERSION"));

/// Gateway that calls `POST {base_url}/v1/chat/completions` with reqwest.
///
/// Stateless: every [`complete`](LlmGateway::complete) call is a single
/// request carrying its own credential and timeout.
pub struct OpenAiLlmGateway {
    client: reqwest::Client,
    base_url: String,
}

impl OpenAiLlmGateway {
    /// Create a gateway for the given API root (e.g. `https://api.openai.com`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GatewayError::ConnectionError(format!("HTTP client setup: {}", e)))?;

        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Full URL of the chat completions endpoint.
    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            CHAT_COMPLETIONS_PATH
        )
    }

    fn transport_error(err: reqwest::Error, request: &CompletionRequest) -> GatewayError {
        if err.is_timeout() {
            GatewayError::Timeout(request.timeout)
        } else {
            GatewayError::ConnectionError(err.to_string())
        }
    }
}

/// Build the error for a response that is not a usable completion.
fn upstream_error(status: reqwest::StatusCode, body: &[u8]) -> GatewayError {
    let message = match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.summary(),
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    };
    GatewayError::Upstream {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl LlmGateway for OpenAiLlmGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError> {
        let url = self.endpoint();
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(request.credential.expose())
            .timeout(request.timeout)
            .json(&ChatCompletionRequest::from(request))
            .send()
            .await
            .map_err(|e| Self::transport_error(e, request))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| Self::transport_error(e, request))?;
        debug!("Response status {} ({} bytes)", status, body.len());

        if !status.is_success() {
            let err = upstream_error(status, &body);
            warn!("Endpoint returned an error: {}", err);
            return Err(err);
        }

        // Some compatible servers report errors with a 200 status.
        if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(&body) {
            let err = GatewayError::ErrorPayload(envelope.error.summary());
            warn!("Endpoint returned an error payload: {}", err);
            return Err(err);
        }

        let parsed: ChatCompletionResponse = serde_json::from_slice(&body)
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;

        parsed.into_completion().ok_or(GatewayError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primecheck_domain::{Credential, Model};
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    fn request(timeout: Duration) -> CompletionRequest {
        CompletionRequest {
            prompt: "TASK: Determine if 17 is a prime number.".to_string(),
            credential: Credential::new("sk-test").unwrap(),
            model: Model::Gpt35Turbo,
            max_tokens: 5,
            temperature: 0.0,
            timeout,
        }
    }

    /// Read one HTTP request (headers plus content-length body).
    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
                let length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= pos + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Serve a single canned response and hand back the captured request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let captured = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            captured
        });

        (format!("http://{}", addr), handle)
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let gateway = OpenAiLlmGateway::new("https://api.openai.com/").unwrap();
        assert_eq!(
            gateway.endpoint(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[tokio::test]
    async fn test_successful_completion() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"model":"gpt-3.5-turbo-0125","choices":[{"index":0,"message":{"role":"assistant","content":"Yes"},"finish_reason":"stop"}],"usage":{"prompt_tokens":96,"completion_tokens":1,"total_tokens":97}}"#,
        )
        .await;
        let gateway = OpenAiLlmGateway::new(base_url).unwrap();

        let completion = gateway
            .complete(&request(Duration::from_secs(5)))
            .await
            .unwrap();

        assert_eq!(completion.text, "Yes");
        assert_eq!(completion.usage.prompt_tokens, 96);

        let captured = server.await.unwrap();
        let lowered = captured.to_lowercase();
        assert!(captured.starts_with("POST /v1/chat/completions HTTP/1.1"));
        assert!(lowered.contains("authorization: bearer sk-test"));
        assert!(captured.contains(r#""max_tokens":5"#));
        assert!(captured.contains(r#""temperature":0.0"#));
        assert!(captured.contains(r#""model":"gpt-3.5-turbo""#));
    }

    #[tokio::test]
    async fn test_error_status_is_upstream_error() {
        let (base_url, server) = serve_once(
            "401 Unauthorized",
            r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error","code":"invalid_api_key"}}"#,
        )
        .await;
        let gateway = OpenAiLlmGateway::new(base_url).unwrap();

        let err = gateway
            .complete(&request(Duration::from_secs(5)))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GatewayError::Upstream {
                status: 401,
                message: "Incorrect API key provided (invalid_request_error)".to_string()
            }
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_error_status_without_json_body() {
        let (base_url, server) = serve_once("503 Service Unavailable", "").await;
        let gateway = OpenAiLlmGateway::new(base_url).unwrap();

        let err = gateway
            .complete(&request(Duration::from_secs(5)))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GatewayError::Upstream {
                status: 503,
                message: "Service Unavailable".to_string()
            }
        );
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_error_payload_with_ok_status() {
        let (base_url, server) =
            serve_once("200 OK", r#"{"error":{"message":"model overloaded"}}"#).await;
        let gateway = OpenAiLlmGateway::new(base_url).unwrap();

        let err = gateway
            .complete(&request(Duration::from_secs(5)))
            .await
            .unwrap_err();

        assert_eq!(err, GatewayError::ErrorPayload("model overloaded".to_string()));
        assert_eq!(err.to_string(), "model overloaded");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_no_choices_is_empty_response() {
        let (base_url, server) = serve_once("200 OK", r#"{"choices":[]}"#).await;
        let gateway = OpenAiLlmGateway::new(base_url).unwrap();

        let err = gateway
            .complete(&request(Duration::from_secs(5)))
            .await
            .unwrap_err();

        assert_eq!(err, GatewayError::EmptyResponse);
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_garbage_body_is_invalid_response() {
        let (base_url, server) = serve_once("200 OK", "not json").await;
        let gateway = OpenAiLlmGateway::new(base_url).unwrap();

        let err = gateway
            .complete(&request(Duration::from_secs(5)))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::InvalidResponse(_)));
        assert!(!err.is_transport());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_refused_connection_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = OpenAiLlmGateway::new(format!("http://{}", addr)).unwrap();
        let err = gateway
            .complete(&request(Duration::from_secs(5)))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::ConnectionError(_)));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(5)).await;
            drop(socket);
        });

        let gateway = OpenAiLlmGateway::new(format!("http://{}", addr)).unwrap();
        let timeout = Duration::from_millis(200);
        let err = gateway.complete(&request(timeout)).await.unwrap_err();

        assert_eq!(err, GatewayError::Timeout(timeout));
        server.abort();
    }
}
