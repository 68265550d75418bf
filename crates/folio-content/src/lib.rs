//! # folio-content
//!
//! The editable portfolio document: its model, the seed defaults, and the
//! defensive normalization pass that turns whatever storage held into a
//! document that satisfies the current schema.
//!
//! Normalization is a pure function over `serde_json::Value`, composed of
//! small per-field coercers that never fail. A corrupt `projects` array must
//! not invalidate a valid `heroTitle`, so the document is reconciled against
//! the defaults field by field rather than parsed all-or-nothing.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod defaults;
pub mod model;
pub mod normalize;

pub use defaults::default_content;
pub use model::{PortfolioContent, PortfolioProject};
pub use normalize::{normalize_project_url, normalize_raw, normalize_value};
