// Configuration error types and constants

use crate::error::ErrorCode;
use std::fmt;
use std::path::PathBuf;

/// Configuration error code constants
///
/// Error code range: 4001-4003
pub struct ConfigErrorCodes {}

impl ConfigErrorCodes {
    /// Config file could not be read
    pub const IO_FAILED: i32 = 4001;

    /// Config file was not valid JSON for [`crate::config::UnrollConfig`]
    pub const PARSE_FAILED: i32 = 4002;

    /// Placeholder prefix was empty
    pub const EMPTY_PREFIX: i32 = 4003;
}

/// Configuration loading errors
///
/// Error code range: 4001-4003
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Config file could not be read
    Io { path: PathBuf, reason: String },

    /// Config file contents were invalid
    Parse { path: PathBuf, reason: String },

    /// An empty placeholder prefix would match between every character
    EmptyPrefix,
}

impl ErrorCode for ConfigError {
    fn code(&self) -> i32 {
        match self {
            ConfigError::Io { .. } => ConfigErrorCodes::IO_FAILED,
            ConfigError::Parse { .. } => ConfigErrorCodes::PARSE_FAILED,
            ConfigError::EmptyPrefix => ConfigErrorCodes::EMPTY_PREFIX,
        }
    }

    fn message(&self) -> String {
        match self {
            ConfigError::Io { path, reason } => {
                format!("Failed to read config file {}: {}", path.display(), reason)
            }
            ConfigError::Parse { path, reason } => {
                format!("Failed to parse config file {}: {}", path.display(), reason)
            }
            ConfigError::EmptyPrefix => "Placeholder prefix must not be empty".to_string(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConfigError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_codes() {
        assert_eq!(
            ConfigError::Io {
                path: PathBuf::from("unroll.json"),
                reason: "test".to_string()
            }
            .code(),
            ConfigErrorCodes::IO_FAILED
        );
        assert_eq!(
            ConfigError::Parse {
                path: PathBuf::from("unroll.json"),
                reason: "test".to_string()
            }
            .code(),
            ConfigErrorCodes::PARSE_FAILED
        );
        assert_eq!(ConfigError::EmptyPrefix.code(), ConfigErrorCodes::EMPTY_PREFIX);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::EmptyPrefix;
        assert!(err.message().contains("must not be empty"));
        assert!(err.to_string().contains("4003"));
    }
}
