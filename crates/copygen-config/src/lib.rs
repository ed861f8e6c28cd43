//! Configuration management for copygen
//!
//! Hierarchical configuration with discovery and precedence:
//! CLI > environment > file > defaults. Config files are TOML with optional
//! `[backend]`, `[style]` and `[logging]` sections.
//!
//! ```toml
//! [backend]
//! base_url = "http://localhost:5000"
//! timeout_secs = 60
//!
//! [style]
//! tone = "professional"
//! platform = "instagram"
//! ```

mod cli_args;
mod discovery;
mod model;
mod sources;
mod validation;

pub use cli_args::CliArgs;
pub use copygen_utils::error::ConfigError;
pub use copygen_utils::types::ConfigSource;
pub use discovery::{BACKEND_URL_ENV_VAR, CONFIG_DIR_NAME, HOME_ENV_VAR};
pub use model::{BackendConfig, Config, LoggingConfig};
