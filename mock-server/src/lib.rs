//! In-memory mock of the MindWell booking backend.
//!
//! # Design
//!
//! The server is seeded with a fixed catalog of experts, availability
//! slots, blog posts and subscription plans so integration tests can
//! assert against known data. Anything a test mutates (accounts,
//! bookings, payments) lives behind `tokio::sync::RwLock` in
//! [`state::AppState`], one state per [`app`] call, so parallel tests
//! never observe each other.
//!
//! Routes under `/api/v1/_test/` exist only for tests: a handler that
//! never responds in time and a toggle that makes a confirmation
//! lookup fail.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

pub mod routes;
pub mod state;
pub mod types;

/// Build a router over a freshly seeded state.
pub fn app() -> Router {
    routes::router(Arc::new(state::AppState::seeded()))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
