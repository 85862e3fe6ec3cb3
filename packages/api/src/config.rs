//! Endpoint override from environment variables.

use store::DashboardConfig;

/// Overrides `source.endpoint` when set (a `.env` file is honoured).
pub const ENDPOINT_VAR: &str = "ADMIN_USERS_ENDPOINT";

/// Read the members endpoint from the environment, if configured.
pub fn endpoint_from_env() -> Option<String> {
    dotenvy::dotenv().ok();
    endpoint_from_var(ENDPOINT_VAR)
}

/// Apply environment overrides on top of a file-based config.
pub fn apply_env(mut config: DashboardConfig) -> DashboardConfig {
    if let Some(endpoint) = endpoint_from_env() {
        tracing::info!("Using members endpoint from {ENDPOINT_VAR}: {endpoint}");
        config.source.endpoint = endpoint;
    }
    config
}

fn endpoint_from_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
