//! Session store
//!
//! Holds the auth token and current user for the lifetime of a login.
//! Created at session start, cleared at logout or when the server
//! rejects the token. Handles are cheap to clone and share one state.

use parking_lot::RwLock;
use shared::User;
use std::sync::Arc;

/// Session data held in memory during the client's lifecycle.
#[derive(Debug, Clone, Default)]
pub struct SessionData {
    /// Bearer token for HTTP API authentication.
    pub token: Option<String>,
    /// Current user information after login.
    pub user: Option<User>,
}

impl SessionData {
    /// Sets the token and user info after successful login.
    pub fn set_login(&mut self, token: String, user: Option<User>) {
        self.token = Some(token);
        self.user = user;
    }

    /// Clears the session data on logout.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }
}

/// Shared handle to the session data
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionData>>,
}

impl Session {
    /// Creates a new empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that already carries a token (e.g. restored from config).
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.inner.write().set_login(token.into(), None);
        session
    }

    pub fn set_login(&self, token: String, user: Option<User>) {
        self.inner.write().set_login(token, user);
    }

    pub fn set_user(&self, user: User) {
        self.inner.write().user = Some(user);
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Returns the token if available.
    pub fn token(&self) -> Option<String> {
        self.inner.read().token.clone()
    }

    /// Returns the current user info if available.
    pub fn user(&self) -> Option<User> {
        self.inner.read().user.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.read().token.is_some()
    }

    pub fn snapshot(&self) -> SessionData {
        self.inner.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Role;

    fn user() -> User {
        User {
            id: 7,
            name: "Ana".into(),
            surname: None,
            born_date: None,
            username: "ana".into(),
            email: "ana@example.com".into(),
            role: Role::Client,
        }
    }

    #[test]
    fn test_clones_share_state() {
        let session = Session::new();
        let handle = session.clone();
        assert!(!handle.is_logged_in());

        session.set_login("tok".into(), Some(user()));
        assert_eq!(handle.token().as_deref(), Some("tok"));
        assert_eq!(handle.user().map(|u| u.id), Some(7));

        handle.clear();
        assert!(!session.is_logged_in());
        assert!(session.user().is_none());
    }

    #[test]
    fn test_with_token() {
        let session = Session::with_token("restored");
        assert!(session.is_logged_in());
        assert!(session.snapshot().user.is_none());
    }
}
