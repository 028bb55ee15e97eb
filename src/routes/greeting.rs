//! Greeting handler for the root path.
//!
//! Serves the fixed greeting body selected at startup. The response is a
//! pure function of configuration: no part of the request is inspected.

use axum::extract::State;
use tracing::instrument;

use crate::state::AppState;

/// Root route handler.
///
/// Returns the configured greeting variant as plain text with status 200.
#[instrument(name = "greeting::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> &'static str {
    state.config.greeting.variant.body()
}
