//! Authentication infrastructure errors.

use std::fmt;

/// Failure of the authentication machinery itself.
///
/// Wrong credentials are not an error: the use case reports those as
/// `Ok(false)`. An `AuthError` means the policy or derivation backend broke
/// and the attempt may simply be retried.
#[derive(Debug, Clone)]
pub enum AuthError {
    /// The policy backend could not produce a policy.
    PolicyUnavailable(String),
    /// The derivation backend failed before producing a digest.
    DerivationFailed(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PolicyUnavailable(msg) => write!(f, "credential policy unavailable: {msg}"),
            Self::DerivationFailed(msg) => write!(f, "credential derivation failed: {msg}"),
        }
    }
}

impl std::error::Error for AuthError {}
