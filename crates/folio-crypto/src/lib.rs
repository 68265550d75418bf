//! # folio-crypto
//!
//! Cryptographic primitives for the folio credential check: PBKDF2-HMAC-SHA256
//! credential derivation and a fixed-width constant-time comparator.
//!
//! Nothing here performs I/O or suspends; the async plumbing lives in
//! `folio-auth`, which calls into these primitives from the blocking pool.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compare;
pub mod constants;
pub mod derivation;

pub use compare::constant_time_equals;
pub use constants::{DIGEST_SIZE, HEX_DIGEST_LEN};
pub use derivation::derive_credential_digest;
