//! Scripted gateway shared by the use case tests.

use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use async_trait::async_trait;
use primecheck_domain::Completion;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Gateway that replays scripted outcomes and counts calls.
pub(crate) struct ScriptedGateway {
    outcomes: Mutex<VecDeque<Result<Completion, GatewayError>>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_request: Mutex<Option<CompletionRequest>>,
}

impl ScriptedGateway {
    pub(crate) fn new(outcomes: Vec<Result<Completion, GatewayError>>) -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::from(outcomes)),
            delay: None,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub(crate) fn answering(text: &str) -> Self {
        Self::new(vec![Ok(Completion::new(text))])
    }

    pub(crate) fn failing(error: GatewayError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Sleep before answering, to exercise the deadline.
    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<Completion, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::ConnectionError("No more responses".into())))
    }
}
