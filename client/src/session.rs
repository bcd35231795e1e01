//! Auth session store: one bearer token plus change notification.
//!
//! # Design
//! The original kept the token in ambient browser storage and broadcast a
//! DOM event on change. Here the session is an explicit object injected
//! into [`crate::ApiClient`], backed by a `tokio::sync::watch` channel so
//! interested parties (a header view, a logout observer) subscribe instead
//! of polling. Optional file persistence plays the role of localStorage:
//! the token survives process restarts within the same user account.
//!
//! No expiry, refresh or multi-client invalidation: a session is valid
//! until cleared or until the backend answers 401, which callers handle.

use std::fs;
use std::path::PathBuf;

use tokio::sync::watch;

/// Process-wide holder of the bearer token.
#[derive(Debug, Clone)]
pub struct SessionStore {
    tx: watch::Sender<Option<String>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// A session that lives only as long as the process.
    pub fn in_memory() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx, path: None }
    }

    /// A session persisted to `path`. An existing token file is loaded
    /// immediately, so a restarted client stays signed in.
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let initial = fs::read_to_string(&path)
            .ok()
            .map(|raw| raw.trim().to_string())
            .filter(|token| !token.is_empty());
        let (tx, _) = watch::channel(initial);
        Self {
            tx,
            path: Some(path),
        }
    }

    /// Current token, if signed in.
    pub fn get(&self) -> Option<String> {
        self.tx.borrow().clone()
    }

    /// Store a new token and notify subscribers.
    pub fn set(&self, token: &str) {
        if let Some(path) = &self.path {
            if let Err(err) = fs::write(path, token) {
                log::warn!("failed to persist session token to {path:?}: {err}");
            }
        }
        self.tx.send_replace(Some(token.to_string()));
    }

    /// Drop the token and notify subscribers. Idempotent.
    pub fn clear(&self) {
        if let Some(path) = &self.path {
            match fs::remove_file(path) {
                Ok(()) => {}
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => log::warn!("failed to remove session token file {path:?}: {err}"),
            }
        }
        self.tx.send_replace(None);
    }

    /// Watch for sign-in/sign-out transitions.
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.tx.subscribe()
    }
}
