//! Composition root.
//!
//! Every long-lived object (storage, the two stores, the authentication
//! use case with its ports) is constructed exactly once here and passed by
//! reference afterwards. No ambient globals, no hidden reinitialization.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};

use folio_auth::{AuthenticateOwner, EmbeddedPolicySource, Pbkdf2Derivation};
use folio_store::{AuthSessionStore, FileStorage, KeyValueStorage, PortfolioContentStore};

/// The application's wired-up object graph.
pub struct AppContext {
    /// Persisted login flag.
    pub session: AuthSessionStore,
    /// Persisted content document.
    pub content: PortfolioContentStore,
    /// Owner-login use case over the embedded policy.
    pub authenticate: AuthenticateOwner,
}

impl AppContext {
    /// Build the object graph over the given data directory (or the
    /// platform default).
    pub fn bootstrap(data_dir: Option<PathBuf>) -> Result<Self> {
        let storage: Arc<dyn KeyValueStorage> = match data_dir {
            Some(dir) => Arc::new(FileStorage::with_dir(dir).context("opening data directory")?),
            None => Arc::new(FileStorage::new().context("opening data directory")?),
        };

        let session = AuthSessionStore::new(Arc::clone(&storage));
        let content = PortfolioContentStore::new(storage);
        let authenticate = AuthenticateOwner::new(
            Arc::new(EmbeddedPolicySource),
            Arc::new(Pbkdf2Derivation),
        );

        Ok(Self {
            session,
            content,
            authenticate,
        })
    }
}
