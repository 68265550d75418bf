//! The owner-login use case.

use std::sync::Arc;

use zeroize::Zeroizing;

use folio_crypto::constant_time_equals;

use crate::errors::AuthError;
use crate::policy::{CredentialRule, LoginCredentials};
use crate::ports::{CredentialDerivation, CredentialPolicySource, DerivationOptions};

/// Checks one login attempt against the deployment's credential policy.
///
/// Wrong credentials are the expected failure and come back as `Ok(false)`;
/// an `Err` means the policy or derivation backend itself failed and the
/// caller may retry the attempt.
pub struct AuthenticateOwner {
    policy_source: Arc<dyn CredentialPolicySource>,
    derivation: Arc<dyn CredentialDerivation>,
}

impl AuthenticateOwner {
    /// Wire the use case to its two ports.
    pub fn new(
        policy_source: Arc<dyn CredentialPolicySource>,
        derivation: Arc<dyn CredentialDerivation>,
    ) -> Self {
        Self {
            policy_source,
            derivation,
        }
    }

    /// Run one login attempt.
    ///
    /// The identifier is trimmed and lowercased (case-insensitive), the
    /// passphrase only trimmed. Both digests derive concurrently, each under
    /// its own salt and iteration count, and both comparisons are always
    /// evaluated: no partial success, no hint about which field was wrong.
    pub async fn execute(&self, credentials: &LoginCredentials) -> Result<bool, AuthError> {
        let policy = self.policy_source.credential_policy().await?;

        let username = Zeroizing::new(credentials.username.trim().to_lowercase());
        let password = Zeroizing::new(credentials.password.trim().to_string());

        let (username_digest, password_digest) = tokio::try_join!(
            self.derivation.derive(&username, options_for(&policy.username)),
            self.derivation.derive(&password, options_for(&policy.password)),
        )?;

        let username_ok = constant_time_equals(&username_digest, &policy.username.expected_hash);
        let password_ok = constant_time_equals(&password_digest, &policy.password.expected_hash);
        Ok(username_ok & password_ok)
    }
}

fn options_for(rule: &CredentialRule) -> DerivationOptions {
    DerivationOptions {
        salt: rule.salt.clone(),
        iterations: rule.iterations,
    }
}
