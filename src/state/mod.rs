//! Shared UI-facing state
//!
//! A [`StateStore`] is handed to whatever needs it instead of living in a
//! global, so each session (or test) gets its own slots.

pub mod store;

pub use store::{StateError, StateHandle, StateStore};

use crate::constants::RESPONSE_STATE_KEY;
use crate::models::ResponseState;
use crate::network::FetchError;

/// The response banner slot, created with default values on first access
pub fn use_response_state(store: &StateStore) -> Result<StateHandle<ResponseState>, StateError> {
    store.use_state(RESPONSE_STATE_KEY, ResponseState::default)
}

impl StateHandle<ResponseState> {
    /// Record a failed request
    pub fn report_error(&self, err: &FetchError) {
        let state = ResponseState::from_fetch_error(err);
        tracing::debug!(message = %state.message, "Response state set to error");
        self.set(state);
    }

    /// Record a successful operation
    pub fn report_success(&self, message: impl Into<String>) {
        let state = ResponseState::success(message);
        tracing::debug!(message = %state.message, "Response state set to success");
        self.set(state);
    }
}
