//! Verdict parsing for primality answers.
//!
//! The model is instructed to answer with a single word. Parsing here is
//! deliberately strict: the answer is trimmed and lowercased, then must be
//! exactly `yes` or `no`. There is no attempt to extract a decision from
//! free text.

use crate::core::error::DomainError;

/// A normalized primality answer (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Yes,
    No,
}

impl Verdict {
    /// Normalize and validate a raw model answer.
    ///
    /// Returns [`DomainError::MalformedAnswer`] carrying the normalized
    /// text when it is anything other than `yes` or `no`.
    pub fn normalize(raw: &str) -> Result<Self, DomainError> {
        let answer = normalize_answer(raw);
        match answer.as_str() {
            "yes" => Ok(Verdict::Yes),
            "no" => Ok(Verdict::No),
            _ => Err(DomainError::MalformedAnswer(answer)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Yes => "yes",
            Verdict::No => "no",
        }
    }

    pub fn is_prime(&self) -> bool {
        matches!(self, Verdict::Yes)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trim surrounding whitespace and lowercase.
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}
