//! # Dashboard configuration (`dashboard.toml`)
//!
//! Defines the TOML configuration file read at startup (filename:
//! [`DashboardConfig::filename`] = `"dashboard.toml"`). Every section and field has a
//! default, so a missing or empty file is equivalent to the default configuration.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//! timeout_secs = 100
//!
//! [listing]
//! search_debounce_ms = 300
//!
//! [storage]
//! scope = "talent"
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`DashboardConfig`] | Top-level config with builder helpers and TOML (de)serialisation. |
//! | [`ApiSection`] | Remote API base URL and per-request timeout (**100 seconds** by default). |
//! | [`ListingSection`] | Search-box debounce for the listing views. |
//! | [`StorageSection`] | Prefix for the persisted session entries. |

use serde::{Deserialize, Serialize};

use crate::session::DEFAULT_SCOPE;

/// Top-level configuration stored in `dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub listing: ListingSection,
    #[serde(default)]
    pub storage: StorageSection,
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiSection {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Upper bound for every outbound request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout_secs() -> u64 {
    100
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Listing view settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListingSection {
    /// Delay after the last keystroke before a search is dispatched. 0 disables debouncing.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_search_debounce_ms() -> u64 {
    300
}

impl Default for ListingSection {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

/// Persistent storage settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageSection {
    #[serde(default = "default_scope")]
    pub scope: String,
}

fn default_scope() -> String {
    DEFAULT_SCOPE.to_string()
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            scope: default_scope(),
        }
    }
}

impl DashboardConfig {
    /// Builder method to point at another API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Builder method to set the search debounce.
    pub fn with_search_debounce(mut self, millis: u64) -> Self {
        self.listing.search_debounce_ms = millis;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
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
