//! Credential policy and login-attempt models.

use std::num::NonZeroU32;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Verification parameters for one credential field.
///
/// The salt is unique per field and never shared between fields; reusing a
/// salt would let one derived digest corroborate the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRule {
    /// Per-field derivation salt.
    pub salt: String,
    /// PBKDF2 iteration count.
    pub iterations: NonZeroU32,
    /// Expected digest, lowercase hex.
    pub expected_hash: String,
}

/// The embedded pair of rules a login attempt is checked against.
///
/// One instance per deployment, sourced from a [`CredentialPolicySource`]
/// at authentication time.
///
/// [`CredentialPolicySource`]: crate::ports::CredentialPolicySource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialPolicy {
    /// Rule for the account identifier (checked case-insensitively).
    pub username: CredentialRule,
    /// Rule for the passphrase (checked case-sensitively).
    pub password: CredentialRule,
}

/// One login attempt, created on submit and scrubbed on drop.
///
/// Deliberately carries no `Debug` impl: plaintext credentials are never
/// logged or persisted.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct LoginCredentials {
    /// Account identifier as typed.
    pub username: String,
    /// Passphrase as typed.
    pub password: String,
}

impl LoginCredentials {
    /// Wrap a submitted pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
