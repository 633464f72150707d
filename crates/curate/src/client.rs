//! GraphQL client for the Curate registry subgraph.
//!
//! One batched request per inbound call; no retries, no pagination. The
//! client's default timeout applies. Endpoint and bearer token come from
//! [`AppConfig`], resolved once at construction.

use serde::Deserialize;
use serde_json::json;

use tagscout_common::config::AppConfig;
use tagscout_common::error::AppError;
use tagscout_common::types::RegistryResponse;
use tagscout_engine::query;

/// Public fallback endpoint, used unless both an API key and an endpoint
/// override are configured.
const DEFAULT_ENDPOINT: &str =
    "https://api.studio.thegraph.com/query/61738/legacy-curate-gnosis/version/latest";

/// GraphQL-over-HTTP response envelope.
#[derive(Debug, Deserialize)]
struct GraphQlEnvelope {
    data: Option<RegistryResponse>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

/// Client for querying the three Curate registries in one request.
#[derive(Debug, Clone)]
pub struct CurateClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl CurateClient {
    /// Build a client from configuration. The production endpoint override
    /// is honored only when an API key is also present.
    pub fn new(config: &AppConfig) -> Self {
        let (endpoint, api_key) = match (&config.curate_api_key, &config.curate_api_url) {
            (Some(key), Some(url)) => (url.clone(), Some(key.clone())),
            _ => (DEFAULT_ENDPOINT.to_string(), None),
        };

        tracing::info!(endpoint = %endpoint, "Using Curate GraphQL endpoint");

        Self {
            http: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Fetch the three registry collections for every (chain, address)
    /// permutation. Network, HTTP-status and GraphQL-level failures all
    /// surface as [`AppError::Upstream`].
    pub async fn fetch_registry_items(
        &self,
        chains: &[String],
        addresses: &[String],
    ) -> Result<RegistryResponse, AppError> {
        let keys = query::eip155_keys(chains, addresses);
        let document = query::build_query(&keys);

        tracing::debug!(key_count = keys.len(), "Querying Curate subgraph");

        let mut request = self.http.post(&self.endpoint).json(&json!({ "query": document }));
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|err| AppError::Upstream(format!("GraphQL request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "GraphQL endpoint returned {status}: {body}"
            )));
        }

        let envelope: GraphQlEnvelope = response
            .json()
            .await
            .map_err(|err| AppError::Upstream(format!("Malformed GraphQL payload: {err}")))?;

        if let Some(errors) = envelope.errors
            && !errors.is_empty()
        {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            return Err(AppError::Upstream(format!(
                "GraphQL errors: {}",
                messages.join("; ")
            )));
        }

        envelope
            .data
            .ok_or_else(|| AppError::Upstream("GraphQL response carried no data".to_string()))
    }
}
