//! Check parameters: request shaping for the primality question.
//!
//! [`CheckParams`] groups the static parameters that control the single
//! completion request issued by
//! [`CheckPrimeUseCase`](crate::use_cases::check_prime::CheckPrimeUseCase).

use primecheck_domain::Model;
use std::time::Duration;
use tracing::debug;

/// Deadline used when no valid override is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Enough for a one-word answer, not enough for an explanation.
pub const DEFAULT_MAX_TOKENS: u32 = 5;

/// Request shaping parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckParams {
    /// Chat model to ask.
    pub model: Model,
    /// Output token cap.
    pub max_tokens: u32,
    /// Sampling temperature; zero for repeatable answers.
    pub temperature: f32,
    /// Deadline for the whole remote exchange.
    pub timeout: Duration,
}

impl Default for CheckParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: 0.0,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl CheckParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve the deadline from a raw timeout-in-seconds value.
    ///
    /// Absent, non-numeric, zero or negative values fall back to
    /// [`DEFAULT_TIMEOUT`].
    pub fn timeout_from_raw(raw: Option<&str>) -> Duration {
        let Some(raw) = raw.filter(|s| !s.is_empty()) else {
            debug!(
                "No timeout configured, using default: {} seconds",
                DEFAULT_TIMEOUT.as_secs()
            );
            return DEFAULT_TIMEOUT;
        };

        debug!("Found timeout setting: {}", raw);
        match raw.parse::<i64>() {
            Ok(secs) if secs > 0 => {
                debug!("Using configured timeout: {} seconds", secs);
                Duration::from_secs(secs as u64)
            }
            _ => {
                debug!(
                    "Invalid timeout value, using default: {} seconds",
                    DEFAULT_TIMEOUT.as_secs()
                );
                DEFAULT_TIMEOUT
            }
        }
    }
}
