//! Session collaborator supplying the auth token.

use std::sync::{Arc, RwLock};

use tracing::debug;

/// Source of the current user's auth token.
///
/// Implementations must not block and must not fail: with no session the
/// token is the empty string.
pub trait Session: Send + Sync {
    fn token(&self) -> String;
}

/// Shared, mutable session owned by the composition root.
#[derive(Clone, Default)]
pub struct SessionHandle {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionHandle {
    /// A handle with no session.
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle already signed in with `token`. An empty token means no session.
    pub fn with_token(token: impl Into<String>) -> Self {
        let handle = Self::new();
        handle.set_token(token);
        handle
    }

    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        let mut guard = self.token.write().unwrap_or_else(|p| p.into_inner());
        *guard = (!token.is_empty()).then_some(token);
        debug!("session token {}", if guard.is_some() { "set" } else { "cleared" });
    }

    pub fn clear(&self) {
        let mut guard = self.token.write().unwrap_or_else(|p| p.into_inner());
        *guard = None;
        debug!("session cleared");
    }

    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .is_some()
    }
}

impl Session for SessionHandle {
    fn token(&self) -> String {
        self.token
            .read()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
            .unwrap_or_default()
    }
}
