//! # Session State
//!
//! Who is signed in. There is no token handling: a successful registration
//! or login hands a [`User`] over and logout forgets it.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use shopfront_core::User;
use tracing::{debug, info};

/// The signed-in user, if any.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub user: Option<User>,
    pub logged_in_at: Option<DateTime<Utc>>,
}

/// Shared session store. Clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    session: Arc<Mutex<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        let session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }

    /// Makes `user` the current user, replacing anyone signed in before.
    pub fn login(&self, user: User) {
        self.with_session_mut(|session| {
            info!(user_id = user.id, "User signed in");
            session.user = Some(user);
            session.logged_in_at = Some(Utc::now());
        });
    }

    /// Signs the current user out and returns them.
    pub fn logout(&self) -> Option<User> {
        self.with_session_mut(|session| {
            session.logged_in_at = None;
            let previous = session.user.take();
            match &previous {
                Some(user) => info!(user_id = user.id, "User signed out"),
                None => debug!("Logout with no user signed in"),
            }
            previous
        })
    }

    pub fn current_user(&self) -> Option<User> {
        self.with_session(|session| session.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.with_session(|session| session.user.is_some())
    }

    pub fn logged_in_at(&self) -> Option<DateTime<Utc>> {
        self.with_session(|session| session.logged_in_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64) -> User {
        User {
            id,
            name: "Maria".to_string(),
            email: "maria@mail.com".to_string(),
            avatar: "https://cdn.test/maria.png".to_string(),
        }
    }

    #[test]
    fn test_starts_signed_out() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());
        assert_eq!(store.current_user(), None);
        assert_eq!(store.logged_in_at(), None);
    }

    #[test]
    fn test_login_then_logout() {
        let store = SessionStore::new();
        store.login(user(3));

        assert!(store.is_authenticated());
        assert_eq!(store.current_user().map(|u| u.id), Some(3));
        assert!(store.logged_in_at().is_some());

        assert_eq!(store.logout().map(|u| u.id), Some(3));
        assert_eq!(store.current_user(), None);
        assert_eq!(store.logged_in_at(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_logout_when_signed_out_is_noop() {
        let store = SessionStore::new();
        assert_eq!(store.logout(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_login_replaces_previous_user() {
        let store = SessionStore::new();
        store.login(user(1));
        store.login(user(2));
        assert_eq!(store.current_user().map(|u| u.id), Some(2));
    }
}
