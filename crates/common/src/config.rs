use serde::Deserialize;

/// Global application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Interface the HTTP server binds to (default: 0.0.0.0)
    pub host: String,

    /// Port the HTTP server listens on (default: 3000)
    pub port: u16,

    /// Allowed CORS origins, comma-separated. `None` allows any origin.
    pub allowed_origins: Option<Vec<String>>,

    /// Bearer token for the production Curate subgraph endpoint
    pub curate_api_key: Option<String>,

    /// Production Curate subgraph endpoint URL. Only used together with
    /// `curate_api_key`; otherwise the public default endpoint applies.
    pub curate_api_url: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid u16"))?,
            allowed_origins: std::env::var("ALLOWED_ORIGINS").ok().map(|raw| {
                raw.split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            }),
            curate_api_key: std::env::var("CURATE_GRAPHQL_API_KEY").ok(),
            curate_api_url: std::env::var("CURATE_GRAPHQL_API_URL").ok(),
        })
    }
}
