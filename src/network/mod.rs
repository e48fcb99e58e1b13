//! Network layer - JSON request execution and status classification
//!
//! `client` holds the free functions that talk to reqwest, `api` wraps them
//! in a small handle with the convenience verbs.

pub mod api;
pub mod client;
pub mod error;

pub use api::Api;
pub use client::{classify, create_client, execute_request, resolve_uri, Outcome};
pub use error::FetchError;
