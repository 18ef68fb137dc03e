use std::sync::Arc;

use shared_types::{Session, UserRole};
use tokio::sync::watch;

/// Owner of the client's authentication state. There is exactly one store
/// per process; every view and the HTTP core hold a clone of the same
/// handle, so nobody reads stale auth out of ambient storage.
///
/// Writes go through `set`/`clear`; reads through `current`/`token`/`role`;
/// views that need to react to login/logout subscribe once via `subscribe`.
/// Last writer wins, and every subscriber observes the change.
#[derive(Clone)]
pub struct SessionStore {
    tx: Arc<watch::Sender<Option<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Install a session (login). Subscribers are notified.
    pub fn set(&self, session: Session) {
        tracing::info!(user = %session.user.email, role = %session.role, "session established");
        self.tx.send_replace(Some(session));
    }

    /// Drop the session (logout). Subscribers are notified.
    pub fn clear(&self) {
        tracing::info!("session cleared");
        self.tx.send_replace(None);
    }

    pub fn current(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.tx.borrow().as_ref().map(|s| s.token.clone())
    }

    pub fn role(&self) -> Option<UserRole> {
        self.tx.borrow().as_ref().map(|s| s.role())
    }

    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// The single subscription point for auth changes. The receiver yields
    /// the latest session snapshot whenever login/logout happens.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
