use copygen_engine::{Configuration, ConfigurationError, StyleOptions};
use copygen_gateway::{DEFAULT_BASE_URL, DEFAULT_CONNECT_TIMEOUT, DEFAULT_TIMEOUT, GatewaySettings};
use copygen_utils::types::ConfigSource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Effective configuration after applying CLI > env > file > defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub backend: BackendConfig,
    /// Default style values; unset fields fall back to the engine defaults
    pub style: StyleOptions,
    pub logging: LoggingConfig,
    /// Source of each effective value, keyed by setting name
    pub source_attribution: HashMap<String, ConfigSource>,
    /// Config file that was loaded, if any
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT.as_secs(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: bool,
}

impl Config {
    /// Connection settings for the HTTP gateway
    #[must_use]
    pub fn gateway_settings(&self) -> GatewaySettings {
        GatewaySettings {
            base_url: self.backend.base_url.clone(),
            timeout: Duration::from_secs(self.backend.timeout_secs),
            connect_timeout: Duration::from_secs(self.backend.connect_timeout_secs),
        }
    }

    /// Parse the configured style defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if a style value is not a known variant.
    /// Discovered configs are already validated, so this only fails for
    /// hand-built values.
    pub fn style_configuration(&self) -> Result<Configuration, ConfigurationError> {
        Configuration::try_from(&self.style)
    }

    #[must_use]
    pub fn source_of(&self, key: &str) -> ConfigSource {
        self.source_attribution
            .get(key)
            .cloned()
            .unwrap_or(ConfigSource::Default)
    }
}
