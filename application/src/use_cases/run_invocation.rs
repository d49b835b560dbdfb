//! Run Invocation use case.
//!
//! One process invocation, start to finish: resolve the credential,
//! resolve the deadline, validate the command-line arguments, then hand
//! over to [`CheckPrimeUseCase`]. Validation is all-or-nothing and always
//! happens before the gateway is touched.

use crate::config::{CheckParams, ConfigurationError, Environment};
use crate::ports::llm_gateway::LlmGateway;
use crate::use_cases::check_prime::{
    CheckPrimeError, CheckPrimeInput, CheckPrimeOutput, CheckPrimeUseCase,
};
use primecheck_domain::{Candidate, Credential, DomainError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, info};

/// Category of a failed invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Usage,
    Configuration,
    Transport,
    Upstream,
    MalformedAnswer,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Usage => "usage",
            FailureKind::Configuration => "configuration",
            FailureKind::Transport => "transport",
            FailureKind::Upstream => "upstream",
            FailureKind::MalformedAnswer => "malformed_answer",
        }
    }
}

/// Errors that terminate an invocation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvocationError {
    #[error("{0}")]
    Usage(DomainError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Check(#[from] CheckPrimeError),
}

impl InvocationError {
    pub fn kind(&self) -> FailureKind {
        match self {
            InvocationError::Usage(_) => FailureKind::Usage,
            InvocationError::Configuration(_) => FailureKind::Configuration,
            InvocationError::Check(CheckPrimeError::Transport(_)) => FailureKind::Transport,
            InvocationError::Check(CheckPrimeError::Upstream(_)) => FailureKind::Upstream,
            InvocationError::Check(CheckPrimeError::MalformedAnswer(_)) => {
                FailureKind::MalformedAnswer
            }
        }
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Input for the [`RunInvocationUseCase`].
#[derive(Debug, Clone)]
pub struct RunInvocationInput {
    /// Positional command-line arguments, flags already removed.
    pub args: Vec<String>,
    pub environment: Environment,
    /// Base request parameters; the timeout is replaced by the one
    /// resolved from the environment.
    pub params: CheckParams,
}

impl RunInvocationInput {
    pub fn new(args: Vec<String>, environment: Environment, params: CheckParams) -> Self {
        Self {
            args,
            environment,
            params,
        }
    }
}

/// Use case for one validate → query → normalize sequence.
#[derive(Clone)]
pub struct RunInvocationUseCase {
    check: CheckPrimeUseCase,
}

impl RunInvocationUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            check: CheckPrimeUseCase::new(gateway),
        }
    }

    pub async fn execute(
        &self,
        input: RunInvocationInput,
    ) -> Result<CheckPrimeOutput, InvocationError> {
        let RunInvocationInput {
            args,
            environment,
            params,
        } = input;

        debug!("Checking for credential in {}", environment.credential_var);
        let credential = environment
            .credential
            .and_then(|secret| Credential::new(secret).ok())
            .ok_or_else(|| {
                error!("{} environment variable not set", environment.credential_var);
                ConfigurationError::MissingCredential {
                    var: environment.credential_var.clone(),
                }
            })?;
        debug!("Credential found in {}", environment.credential_var);

        debug!("Checking for timeout configuration in {}", environment.timeout_var);
        let timeout = CheckParams::timeout_from_raw(environment.timeout.as_deref());
        let params = params.with_timeout(timeout);

        debug!("Command-line arguments: {:?}", args);
        let candidate = Candidate::from_args(args.as_slice()).map_err(|e| {
            error!("{}", e);
            InvocationError::Usage(e)
        })?;
        info!("Successfully parsed number: {}", candidate);

        let output = self
            .check
            .execute(CheckPrimeInput::new(candidate, credential, params))
            .await?;

        Ok(output)
    }
}
