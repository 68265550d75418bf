//! Session check at the navigation boundary.

use crate::session::AuthSessionStore;

/// Outcome of a guarded navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// The session is active; proceed.
    Allow,
    /// No active session; go to the login page and come back afterwards.
    RedirectToLogin {
        /// The page the visitor originally asked for.
        return_url: String,
    },
}

/// Admit the navigation iff a session is active.
///
/// This is the only place where session state crosses into navigation.
pub fn check_route(session: &AuthSessionStore, requested: &str) -> RouteDecision {
    if session.is_authenticated() {
        RouteDecision::Allow
    } else {
        RouteDecision::RedirectToLogin {
            return_url: requested.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::storage::MemoryStorage;

    #[test]
    fn test_unauthenticated_is_redirected_with_return_url() {
        let session = AuthSessionStore::new(Arc::new(MemoryStorage::new()));
        assert_eq!(
            check_route(&session, "dashboard"),
            RouteDecision::RedirectToLogin {
                return_url: "dashboard".to_string()
            }
        );
    }

    #[test]
    fn test_authenticated_is_allowed() {
        let mut session = AuthSessionStore::new(Arc::new(MemoryStorage::new()));
        session.start_session();
        assert_eq!(check_route(&session, "dashboard"), RouteDecision::Allow);
    }
}
