//! Digest-width constants shared by derivation and verification.

/// Width of a derived credential digest in bytes (SHA-256 output).
pub const DIGEST_SIZE: usize = 32;

/// Length of a derived digest rendered as lowercase hex.
pub const HEX_DIGEST_LEN: usize = 2 * DIGEST_SIZE;
