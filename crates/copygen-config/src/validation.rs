use copygen_engine::Configuration;
use copygen_utils::error::ConfigError;

use crate::Config;

/// Accepted range for both timeouts, in seconds
const TIMEOUT_RANGE_SECS: std::ops::RangeInclusive<u64> = 1..=600;

impl Config {
    /// Validate configuration values
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.backend.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "base_url".to_string(),
                value: format!("'{base_url}' must start with http:// or https://"),
            });
        }

        for (key, secs) in [
            ("timeout_secs", self.backend.timeout_secs),
            ("connect_timeout_secs", self.backend.connect_timeout_secs),
        ] {
            if !TIMEOUT_RANGE_SECS.contains(&secs) {
                return Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: format!("{secs} is outside 1..=600 seconds"),
                });
            }
        }

        Configuration::try_from(&self.style).map_err(|e| ConfigError::InvalidValue {
            key: e.field().to_string(),
            value: e.to_string(),
        })?;

        Ok(())
    }
}
