//! Admin session stub.
//!
//! This mirrors the storefront demo's behavior: a plain credential
//! comparison and a presence marker under one key, consumed by a route
//! guard elsewhere. It is explicitly NOT a security model - no hashing, no
//! token validation, no expiry - and must be replaced by a real auth
//! boundary before any non-demo use.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::kv::{KeyValue, StoreError, read_json, write_json};
use crate::signal::{Signal, SubscriberId};

const SESSION_KEY: &str = "artstop_admin";

/// Configured admin credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    /// The demo storefront's well-known credentials.
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        }
    }
}

/// Change notification payload for session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthChanged {
    pub signed_in: bool,
}

/// The persisted session marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionMarker {
    username: String,
    signed_in_at: DateTime<Utc>,
}

/// The admin session store.
///
/// Clones share the same persistence surface and signal.
#[derive(Clone)]
pub struct SessionStore<S> {
    kv: S,
    credentials: AdminCredentials,
    changed: Signal<AuthChanged>,
}

impl<S: KeyValue> SessionStore<S> {
    pub fn new(kv: S, credentials: AdminCredentials) -> Self {
        Self {
            kv,
            credentials,
            changed: Signal::new(),
        }
    }

    /// Subscribe to sign-in/sign-out notifications.
    pub fn subscribe(
        &self,
        listener: impl Fn(&AuthChanged) + Send + Sync + 'static,
    ) -> SubscriberId {
        self.changed.subscribe(listener)
    }

    /// Detach a previously subscribed listener.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        self.changed.unsubscribe(id)
    }

    /// Attempt to sign in. Wrong credentials return `Ok(false)` without
    /// touching persisted state.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures from the key-value surface.
    pub fn sign_in(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        if username != self.credentials.username || password != self.credentials.password {
            return Ok(false);
        }
        let marker = SessionMarker {
            username: username.to_string(),
            signed_in_at: Utc::now(),
        };
        write_json(&self.kv, SESSION_KEY, &marker)?;
        self.changed.emit(&AuthChanged { signed_in: true });
        Ok(true)
    }

    /// Drop the session marker. Idempotent.
    ///
    /// # Errors
    ///
    /// Propagates persistence failures from the key-value surface.
    pub fn sign_out(&self) -> Result<(), StoreError> {
        self.kv.remove(SESSION_KEY)?;
        self.changed.emit(&AuthChanged { signed_in: false });
        Ok(())
    }

    /// Pure presence check; a corrupt marker counts as signed out.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        read_json::<SessionMarker>(&self.kv, SESSION_KEY).is_some()
    }
}
