//! # folio-auth
//!
//! Owner authentication for the portfolio dashboard. The crate is the
//! hexagon's application layer: credential models, the policy-source and
//! derivation ports, one production adapter for each, and the use case that
//! orchestrates a login attempt.
//!
//! There is no account database. A single embedded [`CredentialPolicy`]
//! carries per-field salts, iteration counts and expected digests; a login
//! attempt derives both fields concurrently and compares in constant time.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod authenticate;
pub mod derivation;
pub mod errors;
pub mod policy;
pub mod ports;
pub mod static_policy;

pub use authenticate::AuthenticateOwner;
pub use derivation::Pbkdf2Derivation;
pub use errors::AuthError;
pub use policy::{CredentialPolicy, CredentialRule, LoginCredentials};
pub use ports::{CredentialDerivation, CredentialPolicySource, DerivationOptions};
pub use static_policy::EmbeddedPolicySource;
