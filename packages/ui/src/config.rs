//! Platform-aware configuration loading.
//!
//! - **Web**: built-in defaults; the browser has no config directory.
//! - **Desktop**: `<config_dir>/admin-dashboard/admin-dashboard.toml`, then the
//!   `ADMIN_USERS_ENDPOINT` environment override.

use api::HttpUserSource;
use dioxus::prelude::*;
use store::{DashboardConfig, SourceError};

/// Load the dashboard configuration for this platform.
///
/// A missing or unreadable file yields the defaults; a malformed one is logged
/// and also yields the defaults.
pub fn load_config() -> DashboardConfig {
    #[cfg(target_arch = "wasm32")]
    {
        DashboardConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let path = dirs::config_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("admin-dashboard")
            .join(DashboardConfig::filename());
        let config = match std::fs::read_to_string(&path) {
            Ok(text) => DashboardConfig::from_toml(&text).unwrap_or_else(|e| {
                tracing::warn!("Ignoring {}: {}", path.display(), e);
                DashboardConfig::default()
            }),
            Err(_) => DashboardConfig::default(),
        };
        api::config::apply_env(config)
    }
}

/// Build the HTTP source described by `config`.
pub fn make_source(config: &DashboardConfig) -> Result<HttpUserSource, SourceError> {
    HttpUserSource::from_config(&config.source)
}

/// The `DashboardConfig` provided by the platform's `App`.
pub fn use_dashboard_config() -> DashboardConfig {
    use_context::<DashboardConfig>()
}
