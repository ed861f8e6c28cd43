//! Exit codes for the copygen CLI.
//!
//! # Exit Code Table
//!
//! | Code | Constant | Description |
//! |------|----------|-------------|
//! | 0 | `SUCCESS` | Every requested artifact was generated |
//! | 1 | `PARTIAL_FAILURE` | The outcome contains at least one failure entry |
//! | 2 | `CONFIGURATION` | Invalid arguments, style values, or config file |
//! | 3 | `CANCELLED` | The request was cancelled before it settled |
//! | 4 | `RUNTIME` | I/O or runtime failure outside generation |

use crate::error::{ConfigError, ConfigurationError, GatewayError, GenerationError};

/// Process exit code.
///
/// The numeric values are part of the CLI contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitCode(i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);

    /// Generation settled with at least one failure entry
    pub const PARTIAL_FAILURE: ExitCode = ExitCode(1);

    pub const CONFIGURATION: ExitCode = ExitCode(2);

    pub const CANCELLED: ExitCode = ExitCode(3);

    pub const RUNTIME: ExitCode = ExitCode(4);

    /// Numeric value for `std::process::exit()`.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code.0
    }
}

/// Errors that terminate the CLI with a specific exit code
pub trait ToExitCode {
    fn to_exit_code(&self) -> ExitCode;
}

impl ToExitCode for ConfigError {
    fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::Io { .. } => ExitCode::RUNTIME,
            Self::InvalidFile { .. } | Self::InvalidValue { .. } | Self::NotFound { .. } => {
                ExitCode::CONFIGURATION
            }
        }
    }
}

impl ToExitCode for ConfigurationError {
    fn to_exit_code(&self) -> ExitCode {
        ExitCode::CONFIGURATION
    }
}

impl ToExitCode for GenerationError {
    fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::Configuration(_) => ExitCode::CONFIGURATION,
            Self::Cancelled => ExitCode::CANCELLED,
        }
    }
}

impl ToExitCode for GatewayError {
    fn to_exit_code(&self) -> ExitCode {
        match self {
            Self::InvalidBaseUrl(_) => ExitCode::CONFIGURATION,
            Self::ClientBuild(_) => ExitCode::RUNTIME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::SUCCESS.as_i32(), 0);
        assert_eq!(ExitCode::PARTIAL_FAILURE.as_i32(), 1);
        assert_eq!(ExitCode::CONFIGURATION.as_i32(), 2);
        assert_eq!(ExitCode::CANCELLED.as_i32(), 3);
        assert_eq!(i32::from(ExitCode::RUNTIME), 4);
    }

    #[test]
    fn test_error_mapping() {
        assert_eq!(
            GenerationError::Cancelled.to_exit_code(),
            ExitCode::CANCELLED
        );
        let invalid = ConfigurationError::invalid_value("tone", "loud", &["default"]);
        assert_eq!(invalid.to_exit_code(), ExitCode::CONFIGURATION);
        assert_eq!(
            GenerationError::from(invalid).to_exit_code(),
            ExitCode::CONFIGURATION
        );
        assert_eq!(
            ConfigError::Io {
                path: "config.toml".into(),
                source: std::io::Error::other("denied"),
            }
            .to_exit_code(),
            ExitCode::RUNTIME
        );
        assert_eq!(
            GatewayError::InvalidBaseUrl("ftp://x".into()).to_exit_code(),
            ExitCode::CONFIGURATION
        );
    }
}
