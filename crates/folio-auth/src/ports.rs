//! Swappable backends for policy retrieval and credential derivation.
//!
//! Exactly one production implementation exists for each port
//! ([`EmbeddedPolicySource`], [`Pbkdf2Derivation`]); tests substitute
//! deterministic fakes through the same traits.
//!
//! [`EmbeddedPolicySource`]: crate::static_policy::EmbeddedPolicySource
//! [`Pbkdf2Derivation`]: crate::derivation::Pbkdf2Derivation

use std::num::NonZeroU32;

use async_trait::async_trait;

use crate::errors::AuthError;
use crate::policy::CredentialPolicy;

/// Per-field parameters handed to the derivation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationOptions {
    /// Salt for this field.
    pub salt: String,
    /// Iteration count for this field.
    pub iterations: NonZeroU32,
}

/// Supplies the expected salts, iteration counts and target digests.
#[async_trait]
pub trait CredentialPolicySource: Send + Sync {
    /// The fixed policy for this deployment.
    async fn credential_policy(&self) -> Result<CredentialPolicy, AuthError>;
}

/// Derives a verification digest from a plaintext input.
#[async_trait]
pub trait CredentialDerivation: Send + Sync {
    /// Hex digest of `input` under `options`.
    ///
    /// Deterministic: identical arguments always yield an identical digest.
    /// An `Err` signals backend unavailability, never a wrong credential.
    async fn derive(&self, input: &str, options: DerivationOptions)
        -> Result<String, AuthError>;
}
