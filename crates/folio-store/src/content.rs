//! Persisted portfolio content.

use std::sync::Arc;

use folio_content::{default_content, normalize_raw, PortfolioContent};

use crate::storage::KeyValueStorage;

/// Storage key holding the JSON-encoded content document.
pub const CONTENT_STORAGE_KEY: &str = "folio-portfolio-content-v1";

/// The editable content document, loaded and normalized once at startup.
///
/// Whatever storage held (an old schema, a truncated write, nothing), the
/// store always exposes a document satisfying the current shape.
/// Normalization happens on load only; storage is not rewritten until the
/// next save.
pub struct PortfolioContentStore {
    storage: Arc<dyn KeyValueStorage>,
    content: PortfolioContent,
}

impl PortfolioContentStore {
    /// Load the persisted document, falling back to the defaults when it is
    /// absent or unusable.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let content = match storage.get(CONTENT_STORAGE_KEY) {
            Some(raw) => normalize_raw(&raw),
            None => default_content(),
        };
        Self { storage, content }
    }

    /// Read-only view of the current document.
    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    /// Replace the in-memory document and persist it best-effort.
    ///
    /// The in-memory copy stays authoritative even when the write fails
    /// (quota exceeded by embedded images, storage disabled): the editor
    /// keeps working, durability is silently degraded.
    pub fn save(&mut self, content: PortfolioContent) {
        self.content = content;
        match serde_json::to_string(&self.content) {
            Ok(raw) => {
                if let Err(err) = self.storage.set(CONTENT_STORAGE_KEY, &raw) {
                    tracing::warn!("portfolio content not persisted: {err}");
                }
            }
            Err(err) => tracing::warn!("portfolio content not serializable: {err}"),
        }
    }

    /// Replace the document with the defaults.
    pub fn reset(&mut self) {
        self.save(default_content());
    }
}
