//! Session store: the signed-in user shared through context and mirrored
//! to device storage.
//!
//! Mount [`use_session_provider`] once at the app root, then read or change
//! the session anywhere below with [`use_session`]. The token is never
//! checked for expiry; whatever was stored is trusted until logout.

use api::User;
use dioxus::prelude::*;
use tracing::{info, warn};

use super::storage::{self, UserStore};

/// Copyable handle to the current user (or none).
#[derive(Clone, Copy, PartialEq)]
pub struct Session {
    user: Signal<Option<User>>,
}

impl Session {
    pub fn current(&self) -> Option<User> {
        self.user.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    /// Make `user` the current user and persist it.
    pub fn register(&mut self, user: User) {
        match storage::platform_store() {
            Ok(store) => persist_login(&store, &user),
            Err(err) => warn!("Session not persisted: {err}"),
        }
        info!("Signed in as {}", user.email);
        self.user.set(Some(user));
    }

    /// Forget the current user, in memory and on the device.
    pub fn logout(&mut self) {
        match storage::platform_store() {
            Ok(store) => persist_logout(&store),
            Err(err) => warn!("Stored session not cleared: {err}"),
        }
        info!("Signed out");
        self.user.set(None);
    }
}

/// Provide the session context, hydrated from device storage.
pub fn use_session_provider() -> Session {
    let user = use_signal(|| match storage::platform_store() {
        Ok(store) => hydrate(&store),
        Err(err) => {
            warn!("Device storage unavailable, starting signed out: {err}");
            None
        }
    });
    use_context_provider(|| Session { user })
}

pub fn use_session() -> Session {
    use_context::<Session>()
}

pub(crate) fn hydrate(store: &impl UserStore) -> Option<User> {
    storage::load_user(store)
}

pub(crate) fn persist_login(store: &impl UserStore, user: &User) {
    if let Err(err) = storage::save_user(store, user) {
        warn!("Couldn't persist session: {err}");
    }
}

pub(crate) fn persist_logout(store: &impl UserStore) {
    if let Err(err) = storage::clear_user(store) {
        warn!("Couldn't clear stored session: {err}");
    }
}
