//! Check Prime use case.
//!
//! Asks the configured model whether one integer is prime:
//! build the prompt, issue exactly one completion request bounded by a
//! deadline, then validate the answer strictly. Nothing is retried.

use crate::config::CheckParams;
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use primecheck_domain::{
    Candidate, Credential, DomainError, PromptTemplate, TokenUsage, Verdict, normalize_answer,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, error, info};

/// Errors that can occur while checking a number.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckPrimeError {
    /// The request did not complete: connect failure or deadline exceeded.
    #[error("transport error: {0}")]
    Transport(GatewayError),

    /// The endpoint answered with an error or an unusable payload.
    #[error("upstream error: {0}")]
    Upstream(GatewayError),

    /// The answer was not `yes` or `no` after normalization.
    #[error("unexpected response from model: '{0}'")]
    MalformedAnswer(String),
}

impl From<GatewayError> for CheckPrimeError {
    fn from(err: GatewayError) -> Self {
        if err.is_transport() {
            CheckPrimeError::Transport(err)
        } else {
            CheckPrimeError::Upstream(err)
        }
    }
}

/// Input for the [`CheckPrimeUseCase`].
#[derive(Debug, Clone)]
pub struct CheckPrimeInput {
    pub candidate: Candidate,
    pub credential: Credential,
    pub params: CheckParams,
}

impl CheckPrimeInput {
    pub fn new(candidate: Candidate, credential: Credential, params: CheckParams) -> Self {
        Self {
            candidate,
            credential,
            params,
        }
    }
}

/// Output of a successful check.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckPrimeOutput {
    pub verdict: Verdict,
    pub usage: TokenUsage,
    /// Time spent waiting for the endpoint.
    pub elapsed: Duration,
}

/// Use case for asking the model about one number.
#[derive(Clone)]
pub struct CheckPrimeUseCase {
    gateway: Arc<dyn LlmGateway>,
}

impl CheckPrimeUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self, input: CheckPrimeInput) -> Result<CheckPrimeOutput, CheckPrimeError> {
        let CheckPrimeInput {
            candidate,
            credential,
            params,
        } = input;

        info!("Checking if {} is prime", candidate);

        let prompt = PromptTemplate::primality(candidate);
        debug!("Using prompt: {}", prompt);

        let request = CompletionRequest {
            prompt,
            credential,
            model: params.model.clone(),
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            timeout: params.timeout,
        };

        info!(
            "Sending completion request (model: {}, max_tokens: {}, temperature: {:.1}, timeout: {}s)",
            request.model,
            request.max_tokens,
            request.temperature,
            params.timeout.as_secs()
        );

        let started = Instant::now();
        let outcome = tokio::time::timeout(params.timeout, self.gateway.complete(&request)).await;
        let elapsed = started.elapsed();
        info!("Completion request finished in {:?}", elapsed);

        let completion = match outcome {
            Ok(Ok(completion)) => completion,
            Ok(Err(e)) => {
                error!("Completion request failed: {}", e);
                return Err(e.into());
            }
            Err(_) => {
                error!("Completion request exceeded deadline of {:?}", params.timeout);
                return Err(CheckPrimeError::Transport(GatewayError::Timeout(
                    params.timeout,
                )));
            }
        };

        debug!("Raw response: '{}'", completion.text);
        info!(
            "Token usage - Prompt: {}, Completion: {}, Total: {}",
            completion.usage.prompt_tokens,
            completion.usage.completion_tokens,
            completion.usage.total_tokens
        );
        debug!("Normalized response: '{}'", normalize_answer(&completion.text));

        let verdict = Verdict::normalize(&completion.text).map_err(|e| match e {
            DomainError::MalformedAnswer(answer) => {
                error!("Unexpected response format: '{}'", answer);
                CheckPrimeError::MalformedAnswer(answer)
            }
            other => CheckPrimeError::MalformedAnswer(other.to_string()),
        })?;

        if verdict.is_prime() {
            info!("Confirmed: {} is prime", candidate);
        } else {
            info!("Confirmed: {} is not prime", candidate);
        }

        Ok(CheckPrimeOutput {
            verdict,
            usage: completion.usage,
            elapsed,
        })
    }
}
