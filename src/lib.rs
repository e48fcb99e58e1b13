//! # banner-fetch
//!
//! A small JSON fetch helper plus the shared "response banner" state that UI
//! layers render after an operation.
//!
//! ## Features
//! - GET / POST with an optional JSON body
//! - Status classification into resolved / rejected, carrying parsed JSON
//! - Relative URIs resolved against a configured base URL
//! - Keyed, injectable state store with watch-based subscriptions
//!
//! ## Architecture
//! - Network Layer (reqwest on Tokio) - one request, one outcome, no retries
//! - State Layer - explicit `StateStore` per session, no globals

pub mod config;
pub mod constants;
pub mod models;
pub mod network;
pub mod state;

// Re-export commonly used types
pub use config::{FetchConfig, StatusPolicy};
pub use models::{HttpMethod, ResponseState};
pub use network::{Api, FetchError, Outcome};
pub use state::{use_response_state, StateError, StateHandle, StateStore};
