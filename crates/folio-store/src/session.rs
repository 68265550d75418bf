//! Persisted two-state session flag.

use std::sync::Arc;

use crate::storage::KeyValueStorage;

/// Storage key holding the `"true"`/`"false"` session flag.
pub const SESSION_STORAGE_KEY: &str = "folio-auth-session-v1";

/// The owner's login flag: `Unauthenticated` or `Authenticated`, nothing
/// in between. No timeout, no auto-expiry; only [`start_session`] and
/// [`end_session`] move it.
///
/// Constructed once at startup and passed by reference to whatever needs it.
///
/// [`start_session`]: AuthSessionStore::start_session
/// [`end_session`]: AuthSessionStore::end_session
pub struct AuthSessionStore {
    storage: Arc<dyn KeyValueStorage>,
    authenticated: bool,
}

impl AuthSessionStore {
    /// Read the persisted flag. Anything but the literal `"true"` (absent,
    /// garbage, unreadable storage) means unauthenticated.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let authenticated = storage.get(SESSION_STORAGE_KEY).as_deref() == Some("true");
        Self {
            storage,
            authenticated,
        }
    }

    /// Side-effect-free session query.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Enter `Authenticated` and persist the flag.
    pub fn start_session(&mut self) {
        self.authenticated = true;
        self.persist();
    }

    /// Enter `Unauthenticated` and persist the flag.
    pub fn end_session(&mut self) {
        self.authenticated = false;
        self.persist();
    }

    fn persist(&self) {
        let value = if self.authenticated { "true" } else { "false" };
        if let Err(err) = self.storage.set(SESSION_STORAGE_KEY, value) {
            tracing::warn!("session flag not persisted: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_defaults_to_unauthenticated() {
        let store = AuthSessionStore::new(Arc::new(MemoryStorage::new()));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_survives_reload() {
        let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());

        let mut store = AuthSessionStore::new(Arc::clone(&storage));
        store.start_session();
        assert!(store.is_authenticated());

        // A fresh store over the same storage simulates an app reload.
        let reloaded = AuthSessionStore::new(Arc::clone(&storage));
        assert!(reloaded.is_authenticated());

        let mut store = reloaded;
        store.end_session();
        let reloaded = AuthSessionStore::new(storage);
        assert!(!reloaded.is_authenticated());
    }

    #[test]
    fn test_garbage_flag_means_unauthenticated() {
        let storage = MemoryStorage::with_entries([(
            SESSION_STORAGE_KEY.to_string(),
            "TRUE!".to_string(),
        )]);
        let store = AuthSessionStore::new(Arc::new(storage));
        assert!(!store.is_authenticated());
    }
}
