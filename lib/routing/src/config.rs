//! Router configuration.
//!
//! Loaded via the `config` crate from defaults or a TOML document. The
//! application config flattens this struct and layers [`environment`]
//! (`AAC_PORTAL__BASE_URL`, `AAC_PORTAL__MAX_REDIRECTS`, ...) on top.

use aac_portal_core::BasePath;
use serde::Deserialize;

/// What to do when a navigation matches no route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FallbackPolicy {
    /// Keep the location and render the not-found view.
    #[default]
    NotFound,
    /// Navigate to another target instead.
    Redirect { to: String },
}

/// Router configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouterConfig {
    /// Base URL the application is served under.
    #[serde(default)]
    pub base_url: BasePath,

    /// Handling of navigations that match no route.
    #[serde(default)]
    pub fallback: FallbackPolicy,

    /// Maximum redirect hops before a navigation is abandoned.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

fn default_max_redirects() -> usize {
    8
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_url: BasePath::default(),
            fallback: FallbackPolicy::default(),
            max_redirects: default_max_redirects(),
        }
    }
}

impl RouterConfig {
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

/// The environment source shared by every aac-portal config type.
#[must_use]
pub fn environment() -> config::Environment {
    config::Environment::with_prefix("AAC_PORTAL")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn router_config_has_correct_defaults() {
        let config = RouterConfig::default();
        assert!(config.base_url.is_root());
        assert_eq!(config.fallback, FallbackPolicy::NotFound);
        assert_eq!(config.max_redirects, 8);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = RouterConfig::from_toml("").expect("empty config");
        assert_eq!(config, RouterConfig::default());
    }

    #[test]
    fn document_overrides_values() {
        let config = RouterConfig::from_toml(
            r#"
            base_url = "portal"
            max_redirects = 3

            [fallback]
            kind = "redirect"
            to = "/"
            "#,
        )
        .expect("valid config");

        assert_eq!(config.base_url.as_str(), "/portal/");
        assert_eq!(config.max_redirects, 3);
        assert_eq!(
            config.fallback,
            FallbackPolicy::Redirect {
                to: "/".to_string()
            }
        );
    }

    #[test]
    fn unknown_fallback_kind_is_rejected() {
        let result = RouterConfig::from_toml(
            r#"
            [fallback]
            kind = "explode"
            "#,
        );
        assert!(result.is_err());
    }
}
