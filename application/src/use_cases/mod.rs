//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod check_prime;
pub mod run_invocation;

#[cfg(test)]
pub(crate) mod test_support;
