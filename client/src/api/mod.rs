//! Typed façade over the MindWell REST API.
//!
//! # Design
//! One method per backend endpoint, grouped in modules that mirror the
//! backend's endpoint groups (auth, users, experts, checkout, appointments,
//! blog, subscriptions). Each method builds the URL, attaches the bearer
//! token when the endpoint requires authentication, and delegates every
//! error concern to the transport; there is no endpoint-specific retry or
//! fallback logic here.
//!
//! The session is an explicit injected object rather than ambient global
//! state: the client reads the token per call and the login/logout flows
//! are the only writers.

mod appointments;
mod auth;
mod blog;
mod checkout;
mod experts;
mod subscriptions;
mod users;

use crate::config::Config;
use crate::http::HttpTransport;
use crate::session::SessionStore;
use crate::url::{build_url, Query};

/// Handle to the backend: transport + session, cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: HttpTransport,
    session: SessionStore,
    base_url: String,
}

impl ApiClient {
    /// Build a client from config; the session store is file-backed when
    /// `token_path` is set, in-memory otherwise.
    pub fn new(config: &Config) -> Self {
        let session = match &config.token_path {
            Some(path) => SessionStore::with_file(path),
            None => SessionStore::in_memory(),
        };
        Self::with_session(config, session)
    }

    /// Build a client around an existing session (shared across clients).
    pub fn with_session(config: &Config, session: SessionStore) -> Self {
        Self {
            transport: HttpTransport::new(config),
            session,
            base_url: config.base_url.clone(),
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        build_url(&self.base_url, path, &Query::new())
    }

    fn url_with(&self, path: &str, query: &Query) -> String {
        build_url(&self.base_url, path, query)
    }

    fn bearer(&self) -> Option<String> {
        self.session.get()
    }
}
