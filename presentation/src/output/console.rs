//! Console output formatter for check results

use primecheck_application::{ConfigurationError, InvocationError};
use primecheck_domain::{DomainError, Verdict};

/// One-line usage message.
pub const USAGE: &str = "Usage: prime-checker <number>";

/// Formats results and failures for standard output
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// The single line printed on success.
    pub fn format_verdict(verdict: &Verdict) -> String {
        verdict.as_str().to_string()
    }

    /// Lines printed for a failed invocation.
    ///
    /// Never contains a bare `yes` or `no` line.
    pub fn format_failure(error: &InvocationError) -> Vec<String> {
        match error {
            InvocationError::Usage(DomainError::InvalidNumber(input)) => {
                vec![format!("Error: Invalid number '{}'", input), USAGE.to_string()]
            }
            InvocationError::Usage(_) => vec![USAGE.to_string()],
            InvocationError::Configuration(ConfigurationError::MissingCredential { var }) => {
                vec![
                    format!("Error: {} environment variable not set", var),
                    "Please set it in your .env file or in your environment".to_string(),
                ]
            }
            InvocationError::Configuration(e) => vec![format!("Error: {}", e)],
            InvocationError::Check(e) => vec![format!("Error: {}", e)],
        }
    }
}
