//! Application layer for prime-checker
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{CheckParams, ConfigurationError, Environment};
pub use ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
pub use use_cases::check_prime::{
    CheckPrimeError, CheckPrimeInput, CheckPrimeOutput, CheckPrimeUseCase,
};
pub use use_cases::run_invocation::{
    FailureKind, InvocationError, RunInvocationInput, RunInvocationUseCase,
};
