//! Credential value object

use super::error::DomainError;

/// Secret authorizing calls to the completion endpoint (Value Object)
///
/// Guaranteed non-empty. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    secret: String,
}

impl Credential {
    /// Try to create a credential, rejecting empty strings
    pub fn new(secret: impl Into<String>) -> Result<Self, DomainError> {
        let secret = secret.into();
        if secret.is_empty() {
            Err(DomainError::EmptyCredential)
        } else {
            Ok(Self { secret })
        }
    }

    /// Get the secret for use in an authorization header
    pub fn expose(&self) -> &str {
        &self.secret
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("secret", &"<redacted>")
            .finish()
    }
}
