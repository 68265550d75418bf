//! PBKDF2-HMAC-SHA256 credential derivation.

use std::num::NonZeroU32;

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use crate::constants::DIGEST_SIZE;

/// Derive the verification digest for one credential field.
///
/// Deterministic in `(input, salt, iterations)`; the output is always
/// [`HEX_DIGEST_LEN`](crate::HEX_DIGEST_LEN) lowercase hex characters. Salts
/// are unique per field and must never be reused across unrelated fields.
pub fn derive_credential_digest(input: &str, salt: &str, iterations: NonZeroU32) -> String {
    let mut digest = [0u8; DIGEST_SIZE];
    pbkdf2_hmac::<Sha256>(
        input.as_bytes(),
        salt.as_bytes(),
        iterations.get(),
        &mut digest,
    );
    hex::encode(digest)
}
