//! Build-embedded credential policy.
//!
//! Salts are assembled from byte arrays and expected digests from hex
//! fragments rather than stored as literal strings. Anyone holding the
//! artifact can reconstruct them; the assembly only keeps the values out of
//! a casual `strings` pass over the binary.

use std::num::NonZeroU32;

use async_trait::async_trait;

use crate::errors::AuthError;
use crate::policy::{CredentialPolicy, CredentialRule};
use crate::ports::CredentialPolicySource;

const USERNAME_SALT: &[u8] = &[
    102, 111, 108, 105, 111, 45, 117, 115, 101, 114, 45, 97, 117, 114, 111, 114, 97, 45, 50, 48,
    50, 54,
];
const USERNAME_ITERATIONS: u32 = 120_000;
const USERNAME_DIGEST: [&str; 4] = [
    "30ea59d151820cd7",
    "4922e9bddc8ddd82",
    "28423584ce4e2be4",
    "fae244e3eb1dc24a",
];

const PASSWORD_SALT: &[u8] = &[
    102, 111, 108, 105, 111, 45, 112, 97, 115, 115, 45, 97, 117, 114, 111, 114, 97, 45, 50, 48,
    50, 54,
];
const PASSWORD_ITERATIONS: u32 = 180_000;
const PASSWORD_DIGEST: [&str; 4] = [
    "d00d80187fb3d746",
    "ecd8b8fc550eaebc",
    "21581e44067840a9",
    "b8d10bdbf3a67689",
];

/// The production policy source: fixed at build time, never fails.
pub struct EmbeddedPolicySource;

impl EmbeddedPolicySource {
    fn rule(salt: &[u8], iterations: u32, digest: &[&str]) -> CredentialRule {
        CredentialRule {
            salt: String::from_utf8_lossy(salt).into_owned(),
            iterations: NonZeroU32::new(iterations).expect("embedded iteration count is non-zero"),
            expected_hash: digest.concat(),
        }
    }
}

#[async_trait]
impl CredentialPolicySource for EmbeddedPolicySource {
    async fn credential_policy(&self) -> Result<CredentialPolicy, AuthError> {
        Ok(CredentialPolicy {
            username: Self::rule(USERNAME_SALT, USERNAME_ITERATIONS, &USERNAME_DIGEST),
            password: Self::rule(PASSWORD_SALT, PASSWORD_ITERATIONS, &PASSWORD_DIGEST),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_crypto::HEX_DIGEST_LEN;

    #[tokio::test]
    async fn test_embedded_policy_is_well_formed() {
        let policy = EmbeddedPolicySource.credential_policy().await.unwrap();

        for rule in [&policy.username, &policy.password] {
            assert!(!rule.salt.is_empty());
            assert_eq!(rule.expected_hash.len(), HEX_DIGEST_LEN);
            assert!(rule.expected_hash.chars().all(|c| c.is_ascii_hexdigit()));
        }

        // Per-field salts must never be shared.
        assert_ne!(policy.username.salt, policy.password.salt);
        assert_ne!(policy.username.expected_hash, policy.password.expected_hash);
    }

    #[tokio::test]
    async fn test_embedded_policy_is_stable() {
        let first = EmbeddedPolicySource.credential_policy().await.unwrap();
        let second = EmbeddedPolicySource.credential_policy().await.unwrap();
        assert_eq!(first, second);
    }
}
