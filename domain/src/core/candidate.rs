//! Candidate value object: the integer whose primality is being asked about.

use super::error::DomainError;

/// The number to check (Value Object)
///
/// Wraps a signed 64-bit integer. Construction from user input goes
/// through [`Candidate::from_args`] or [`Candidate::parse`], which accept
/// only a plain base-10 literal with an optional leading sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate(i64);

impl Candidate {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Validate the positional arguments of an invocation.
    ///
    /// Succeeds only when there is exactly one argument and it parses
    /// as a base-10 signed integer.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, DomainError> {
        match args {
            [single] => Self::parse(single.as_ref()),
            _ => Err(DomainError::ArgumentCount { got: args.len() }),
        }
    }

    /// Parse a single token as a base-10 signed integer.
    ///
    /// Surrounding whitespace is rejected rather than trimmed.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        input
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidNumber(input.to_string()))
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Candidate {
    fn from(value: i64) -> Self {
        Self(value)
    }
}
