//! Address tag lookup route.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use tagscout_common::error::AppError;
use tagscout_common::types::{AddressTagRequest, AddressTagResponse};
use tagscout_engine::{reconciler, validator};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/address-tags", post(get_address_tags))
}

/// POST /api/address-tags — Reconciled tags for every requested
/// (address, chain) pair.
///
/// Validation runs in two layers (structural, then business limits), each
/// able to reject on its own. The whole request either succeeds or fails
/// with one error envelope; there is no partial success.
async fn get_address_tags(
    State(state): State<AppState>,
    Json(request): Json<AddressTagRequest>,
) -> Result<Json<AddressTagResponse>, AppError> {
    validator::validate_structure(&request)?;
    validator::validate_limits(&request)?;

    let snapshot = state
        .curate
        .fetch_registry_items(&request.chains, &request.addresses)
        .await?;

    let response = reconciler::reconcile(&snapshot, &request.chains, &request.addresses);

    tracing::debug!(
        addresses = request.addresses.len(),
        chains = request.chains.len(),
        "Reconciled address tags"
    );

    Ok(Json(response))
}
