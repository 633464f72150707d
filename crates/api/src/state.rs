//! Shared application state for the Axum API server.

use tagscout_common::config::AppConfig;
use tagscout_curate::CurateClient;

/// Application state shared across all route handlers via Axum `State`.
///
/// Everything here is request-independent; per-request data structures are
/// freshly constructed in the handlers, so concurrent requests share no
/// mutable state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub curate: CurateClient,
}

impl AppState {
    pub fn new(config: AppConfig, curate: CurateClient) -> Self {
        Self { config, curate }
    }
}
