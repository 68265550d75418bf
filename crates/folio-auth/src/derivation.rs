//! Production derivation backend.

use async_trait::async_trait;

use folio_crypto::derive_credential_digest;

use crate::errors::AuthError;
use crate::ports::{CredentialDerivation, DerivationOptions};

/// PBKDF2-HMAC-SHA256 derivation on the blocking pool.
///
/// The digest loop is CPU-bound at the policy's iteration counts, so it runs
/// via `spawn_blocking` rather than stalling the async executor. The
/// primitive itself cannot fail; the only `Err` path is a torn-down blocking
/// pool, which the caller treats as infrastructure failure.
pub struct Pbkdf2Derivation;

#[async_trait]
impl CredentialDerivation for Pbkdf2Derivation {
    async fn derive(
        &self,
        input: &str,
        options: DerivationOptions,
    ) -> Result<String, AuthError> {
        let input = input.to_owned();
        tokio::task::spawn_blocking(move || {
            derive_credential_digest(&input, &options.salt, options.iterations)
        })
        .await
        .map_err(|err| AuthError::DerivationFailed(err.to_string()))
    }
}
