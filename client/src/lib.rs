//! Async API client for the MindWell mental-wellness booking platform.
//!
//! # Overview
//! Users browse experts, book appointments from availability slots, pay
//! with MindPoints or an external gateway, and read blog content. This
//! crate is the client side of that: a JSON transport with timeout-based
//! cancellation, an injected session store, a typed façade over every
//! backend endpoint, and the booking/checkout coordinator that chains
//! draft creation, checkout loading, payment initiation and confirmation.
//!
//! # Design
//! - All state the backend owns stays backend-owned: DTOs are transient
//!   values and status fields are displayed, never enforced.
//! - Cancellation is cooperative and scope-based. A fetch started by a
//!   newer parameter change always cancels its predecessor, and aborted
//!   results are never applied ([`resource::Resource`]).
//! - GET requests retry with bounded backoff; booking and payment POSTs
//!   are single-attempt by design.
//! - Integration tests drive the real transport against the
//!   `mindwell-mock-server` crate.

pub mod api;
pub mod checkout;
pub mod config;
pub mod error;
pub mod http;
pub mod pages;
pub mod resource;
pub mod session;
pub mod types;
pub mod url;

pub use api::ApiClient;
pub use checkout::{CheckoutFlow, CheckoutStage, PaymentOutcome, PaymentSelection, PaymentWindow};
pub use config::Config;
pub use error::ApiError;
pub use resource::{Resource, ResourceState};
pub use session::SessionStore;
