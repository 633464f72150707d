pub mod address_tags;
pub mod health;

use axum::http::{Method, Uri};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use tagscout_common::error::AppError;

use crate::state::AppState;

/// Build the complete API router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .merge(health::router())
        .merge(address_tags::router())
        .fallback(not_found)
        .with_state(state)
}

/// GET / — Service and endpoint listing.
async fn service_info() -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "data": {
            "message": "Tagscout Address Tag Service",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "POST /api/address-tags": "Get address tags for given chains and addresses",
                "GET /api/health": "Health check endpoint"
            }
        }
    }))
}

/// Catch-all for unknown routes, rendered in the standard error envelope.
async fn not_found(method: Method, uri: Uri) -> AppError {
    tracing::warn!(%method, %uri, "404 Not Found");
    AppError::NotFound(format!("Endpoint {method} {uri} not found"))
}
