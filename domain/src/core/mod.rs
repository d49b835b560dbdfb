//! Core domain concepts shared across all subdomains.
//!
//! - [`candidate::Candidate`] — the integer being asked about
//! - [`credential::Credential`] — the endpoint secret
//! - [`model::Model`] — chat models (GPT family or custom)
//! - [`error::DomainError`] — domain-level errors

pub mod candidate;
pub mod credential;
pub mod error;
pub mod model;
