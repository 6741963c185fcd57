//! Application configuration.
//!
//! This module provides strongly-typed configuration for the web client,
//! loaded via the `config` crate.
//!
//! See [`RouterConfig`] for the routing options flattened into it.

use aac_portal_routing::RouterConfig;
use aac_portal_routing::config::environment;
use serde::Deserialize;

/// Base URL baked in at build time, if any.
const BUILD_BASE_URL: Option<&str> = option_env!("AAC_PORTAL_BASE_URL");

/// Web client configuration composed from library configs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Id of the element the application mounts into.
    #[serde(default = "default_mount_id")]
    pub mount_id: String,

    /// Routing configuration.
    #[serde(flatten)]
    pub router: RouterConfig,
}

fn default_mount_id() -> String {
    "app".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mount_id: default_mount_id(),
            router: RouterConfig::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from the environment and the build-time base URL.
    ///
    /// The build-time base URL wins over any runtime value.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration values are invalid.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(environment())
            .set_override_option("base_url", BUILD_BASE_URL)?
            .build()?
            .try_deserialize()
    }

    /// Loads configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not parse or has invalid values.
    pub fn from_toml(document: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
