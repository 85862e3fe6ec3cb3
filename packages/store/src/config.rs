//! # Dashboard configuration — `admin-dashboard.toml`
//!
//! Defines the optional TOML file that tells the dashboard where to fetch the
//! members document from and how the table paginates
//! (filename: [`DashboardConfig::filename`] = `"admin-dashboard.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [source]
//! endpoint = "https://example.com/members.json"
//! timeout_secs = 30       # native HTTP client only
//!
//! [table]
//! page_size = 10
//! page_size_options = [10]
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DashboardConfig`] | Top-level config. Builder helpers (`with_endpoint`, `with_page_size`), TOML (de)serialisation, and the canonical filename. |
//! | [`SourceConfig`] | Remote data source — `endpoint` URL and request `timeout_secs` (default **30**). |
//! | [`TableConfig`] | Table section — `page_size` (default **10**) and the sizes offered in the page-size picker. |
//!
//! All structs implement `Default` so a missing or empty file is equivalent to
//! the default configuration.

use serde::{Deserialize, Serialize};

/// The members document the dashboard was built against.
pub const DEFAULT_ENDPOINT: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Top-level configuration stored in `admin-dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub table: TableConfig,
}

/// Where the user records come from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// URL of the JSON array of user records.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds. 0 disables the timeout.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Pagination settings for the users table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_page_size() -> usize {
    10
}

fn default_page_size_options() -> Vec<usize> {
    vec![10]
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

impl TableConfig {
    /// Page size options with the configured size included, sorted, zeros dropped.
    pub fn size_choices(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self
            .page_size_options
            .iter()
            .copied()
            .chain(std::iter::once(self.page_size))
            .filter(|&s| s > 0)
            .collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }
}

impl DashboardConfig {
    /// Builder method to point at a different members document.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.source.endpoint = endpoint.into();
        self
    }

    /// Builder method to set the initial page size.
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.table.page_size = size;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "admin-dashboard.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
