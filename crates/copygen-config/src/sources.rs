use std::collections::BTreeMap;

use crate::Config;

impl Config {
    /// Effective configuration as `key -> (value, source)`.
    ///
    /// Unset style values are reported with their engine default.
    #[must_use]
    pub fn effective_config(&self) -> BTreeMap<String, (String, String)> {
        let defaults = copygen_engine::Configuration::default();
        let mut config = BTreeMap::new();

        let mut add_config = |key: &str, value: String| {
            let source = self.source_of(key).label().to_string();
            config.insert(key.to_string(), (value, source));
        };

        add_config("base_url", self.backend.base_url.clone());
        add_config("timeout_secs", self.backend.timeout_secs.to_string());
        add_config(
            "connect_timeout_secs",
            self.backend.connect_timeout_secs.to_string(),
        );
        add_config(
            "tone",
            self.style
                .tone
                .clone()
                .unwrap_or_else(|| defaults.tone.to_string()),
        );
        add_config(
            "length",
            self.style
                .length
                .clone()
                .unwrap_or_else(|| defaults.length.to_string()),
        );
        add_config(
            "style",
            self.style
                .style
                .clone()
                .unwrap_or_else(|| defaults.style.to_string()),
        );
        add_config(
            "platform",
            self.style
                .platform
                .clone()
                .unwrap_or_else(|| defaults.platform.to_string()),
        );
        add_config("verbose", self.logging.verbose.to_string());

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copygen_utils::types::ConfigSource;

    #[test]
    fn test_effective_config_reports_sources() {
        let mut config = Config::default();
        config.backend.timeout_secs = 30;
        config
            .source_attribution
            .insert("timeout_secs".to_string(), ConfigSource::Config);
        config.style.tone = Some("witty".to_string());
        config
            .source_attribution
            .insert("tone".to_string(), ConfigSource::Cli);

        let effective = config.effective_config();

        assert_eq!(effective["timeout_secs"], ("30".to_string(), "config".to_string()));
        assert_eq!(effective["tone"], ("witty".to_string(), "cli".to_string()));
        assert_eq!(
            effective["length"],
            ("medium".to_string(), "default".to_string())
        );
        assert_eq!(
            effective["platform"],
            ("email".to_string(), "default".to_string())
        );
        assert_eq!(effective.len(), 8);
    }
}
