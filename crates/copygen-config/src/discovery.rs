use copygen_engine::StyleOptions;
use copygen_utils::error::ConfigError;
use copygen_utils::types::ConfigSource;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{BackendConfig, CliArgs, Config, LoggingConfig};

/// Directory searched for `config.toml`
pub const CONFIG_DIR_NAME: &str = ".copygen";

/// Overrides the config directory
pub const HOME_ENV_VAR: &str = "COPYGEN_HOME";

/// Overrides `backend.base_url`
pub const BACKEND_URL_ENV_VAR: &str = "COPYGEN_BACKEND_URL";

/// TOML configuration file structure
#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    backend: Option<TomlBackend>,
    style: Option<StyleOptions>,
    logging: Option<TomlLogging>,
}

#[derive(Debug, Default, Deserialize)]
struct TomlBackend {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    connect_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct TomlLogging {
    verbose: Option<bool>,
}

impl Config {
    /// Discover and load configuration with precedence: CLI > env > file > defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the working directory is unavailable, a config
    /// file cannot be read or parsed, or a value fails validation.
    pub fn discover(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let start_dir = std::env::current_dir().map_err(|source| ConfigError::Io {
            path: ".".to_string(),
            source,
        })?;
        Self::discover_from(&start_dir, cli_args)
    }

    /// Discover configuration starting from a specific directory
    ///
    /// # Errors
    ///
    /// See [`Config::discover`].
    pub fn discover_from(start_dir: &Path, cli_args: &CliArgs) -> Result<Self, ConfigError> {
        Self::discover_with_env(start_dir, cli_args, |key| {
            std::env::var(key).ok().filter(|v| !v.is_empty())
        })
    }

    /// Path-driven variant with an injected environment, used by tests to
    /// avoid process-global state.
    pub(crate) fn discover_with_env<F>(
        start_dir: &Path,
        cli_args: &CliArgs,
        env: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut source_attribution = HashMap::new();
        let mut backend = BackendConfig::default();
        let mut style = StyleOptions::default();
        let mut logging = LoggingConfig::default();

        for key in [
            "base_url",
            "timeout_secs",
            "connect_timeout_secs",
            "tone",
            "length",
            "style",
            "platform",
            "verbose",
        ] {
            source_attribution.insert(key.to_string(), ConfigSource::Default);
        }

        let config_path = match &cli_args.config_path {
            Some(explicit) => {
                if !explicit.is_file() {
                    return Err(ConfigError::NotFound {
                        path: explicit.display().to_string(),
                    });
                }
                Some(explicit.clone())
            }
            None => match env(HOME_ENV_VAR) {
                Some(home) => {
                    let path = PathBuf::from(home).join("config.toml");
                    path.is_file().then_some(path)
                }
                None => Self::discover_config_file_from(start_dir),
            },
        };

        if let Some(path) = &config_path {
            debug!(path = %path.display(), "Loading config file");
            let file_config = Self::load_config_file(path)?;
            let source = ConfigSource::Config;
            let mut mark = |key: &str| {
                source_attribution.insert(key.to_string(), source.clone());
            };

            if let Some(file_backend) = file_config.backend {
                if let Some(base_url) = file_backend.base_url {
                    backend.base_url = base_url;
                    mark("base_url");
                }
                if let Some(timeout) = file_backend.timeout_secs {
                    backend.timeout_secs = timeout;
                    mark("timeout_secs");
                }
                if let Some(connect_timeout) = file_backend.connect_timeout_secs {
                    backend.connect_timeout_secs = connect_timeout;
                    mark("connect_timeout_secs");
                }
            }

            if let Some(file_style) = file_config.style {
                for (key, slot, value) in [
                    ("tone", &mut style.tone, file_style.tone),
                    ("length", &mut style.length, file_style.length),
                    ("style", &mut style.style, file_style.style),
                    ("platform", &mut style.platform, file_style.platform),
                ] {
                    if value.is_some() {
                        *slot = value;
                        mark(key);
                    }
                }
            }

            if let Some(verbose) = file_config.logging.and_then(|l| l.verbose) {
                logging.verbose = verbose;
                mark("verbose");
            }
        }

        if let Some(url) = env(BACKEND_URL_ENV_VAR) {
            backend.base_url = url;
            source_attribution.insert("base_url".to_string(), ConfigSource::Env);
        }

        // CLI overrides everything
        if let Some(url) = &cli_args.backend_url {
            backend.base_url = url.clone();
            source_attribution.insert("base_url".to_string(), ConfigSource::Cli);
        }
        if let Some(timeout) = cli_args.timeout_secs {
            backend.timeout_secs = timeout;
            source_attribution.insert("timeout_secs".to_string(), ConfigSource::Cli);
        }
        for (key, slot, value) in [
            ("tone", &mut style.tone, &cli_args.tone),
            ("length", &mut style.length, &cli_args.length),
            ("style", &mut style.style, &cli_args.style),
            ("platform", &mut style.platform, &cli_args.platform),
        ] {
            if value.is_some() {
                slot.clone_from(value);
                source_attribution.insert(key.to_string(), ConfigSource::Cli);
            }
        }
        if let Some(verbose) = cli_args.verbose {
            logging.verbose = verbose;
            source_attribution.insert("verbose".to_string(), ConfigSource::Cli);
        }

        let config = Self {
            backend,
            style,
            logging,
            source_attribution,
            config_path,
        };

        config.validate()?;

        Ok(config)
    }

    /// Discover config file by searching upward from a given directory
    ///
    /// Walks up the directory tree looking for `.copygen/config.toml`, stopping
    /// at repository root markers (.git, .hg, .svn) or filesystem root.
    #[must_use]
    pub fn discover_config_file_from(start_dir: &Path) -> Option<PathBuf> {
        let mut current_dir = start_dir;

        loop {
            let config_path = current_dir.join(CONFIG_DIR_NAME).join("config.toml");
            if config_path.is_file() {
                return Some(config_path);
            }

            if [".git", ".hg", ".svn"]
                .iter()
                .any(|marker| current_dir.join(marker).exists())
            {
                return None;
            }

            current_dir = current_dir.parent()?;
        }
    }

    fn load_config_file(path: &Path) -> Result<TomlConfig, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::InvalidFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
