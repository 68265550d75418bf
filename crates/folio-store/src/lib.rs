//! # folio-store
//!
//! Client-side persistence for the portfolio app: a string-keyed storage
//! port with file-backed and in-memory adapters, the session flag store, the
//! content store, and the route guard that keeps the dashboard behind a
//! session.
//!
//! Persistence is deliberately best-effort. Reads that fail are treated as
//! absent and fall back to defaults; writes get a single attempt and a
//! warning on failure, leaving the in-memory state authoritative. Worst case
//! the app behaves as if storage were empty.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod content;
pub mod errors;
pub mod guard;
pub mod session;
pub mod storage;

pub use content::{PortfolioContentStore, CONTENT_STORAGE_KEY};
pub use errors::StorageError;
pub use guard::{check_route, RouteDecision};
pub use session::{AuthSessionStore, SESSION_STORAGE_KEY};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
