//! Configuration for description rendering and registration logging
//!
//! Settings can come from a JSON file, from environment variables, or from
//! defaults. File loading mirrors the forgiving behaviour most test suites
//! want: a missing or malformed file logs a warning and falls back to the
//! defaults, while [`UnrollConfig::try_load_from_file`] surfaces the error.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ConfigError, ErrorCode};

/// Environment variable overriding the placeholder prefix.
pub const PREFIX_ENV: &str = "UNROLL_PLACEHOLDER_PREFIX";

/// Environment variable enabling info-level registration logs.
pub const TRACE_ENV: &str = "UNROLL_TRACE";

/// Prefix marking a placeholder in a description template.
pub const DEFAULT_PLACEHOLDER_PREFIX: &str = "#";

/// Configuration derived from the environment once, for callers that opt in.
static AMBIENT: Lazy<UnrollConfig> = Lazy::new(UnrollConfig::from_env);

/// Helper configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnrollConfig {
    /// Token preceding a fixture field name in a description (`#` in `#input`)
    pub placeholder_prefix: String,
    /// Log each registration at info level instead of debug
    pub trace_registrations: bool,
}

impl Default for UnrollConfig {
    fn default() -> Self {
        Self {
            placeholder_prefix: DEFAULT_PLACEHOLDER_PREFIX.to_string(),
            trace_registrations: false,
        }
    }
}

impl UnrollConfig {
    /// Configuration read from the environment on first use.
    ///
    /// Nothing in the crate applies this implicitly; pass it to
    /// [`crate::Unroll::config`] to use it.
    pub fn ambient() -> &'static UnrollConfig {
        &AMBIENT
    }

    /// Defaults overridden by `UNROLL_PLACEHOLDER_PREFIX` and `UNROLL_TRACE`.
    ///
    /// An empty prefix variable is ignored.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(PREFIX_ENV).ok().as_deref(),
            std::env::var(TRACE_ENV).ok().as_deref(),
        )
    }

    fn from_vars(prefix: Option<&str>, trace: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
            config.placeholder_prefix = prefix.to_string();
        }
        if let Some(trace) = trace {
            config.trace_registrations = trace == "1" || trace.eq_ignore_ascii_case("true");
        }
        config
    }

    /// Load configuration from JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// The loaded configuration, or the defaults if the file is missing,
    /// malformed, or fails validation.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match Self::try_load_from_file(&path) {
            Ok(config) => {
                log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                config
            }
            Err(ConfigError::Io { path, reason }) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path,
                    reason
                );
                Self::default()
            }
            Err(err) => {
                log::warn!(
                    "[Config] Invalid config file {:?}: code={}, {}. Using defaults.",
                    path.as_ref(),
                    err.code(),
                    err.message()
                );
                Self::default()
            }
        }
    }

    /// Load and validate configuration from a JSON file.
    pub fn try_load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        let config: UnrollConfig =
            serde_json::from_str(&contents).map_err(|err| ConfigError::Parse {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.placeholder_prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigErrorCodes;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("unroll-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_default_config() {
        let config = UnrollConfig::default();
        assert_eq!(config.placeholder_prefix, "#");
        assert!(!config.trace_registrations);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_roundtrip() {
        let config = UnrollConfig {
            placeholder_prefix: "$".to_string(),
            trace_registrations: true,
        };
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: UnrollConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_json_uses_field_defaults() {
        let parsed: UnrollConfig = serde_json::from_str(r#"{"trace_registrations": true}"#).unwrap();
        assert_eq!(parsed.placeholder_prefix, "#");
        assert!(parsed.trace_registrations);
    }

    #[test]
    fn test_env_overrides() {
        let config = UnrollConfig::from_vars(Some("@"), Some("TRUE"));
        assert_eq!(config.placeholder_prefix, "@");
        assert!(config.trace_registrations);

        let config = UnrollConfig::from_vars(Some(""), Some("0"));
        assert_eq!(config, UnrollConfig::default());
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let config = UnrollConfig::load_from_file("/nonexistent/unroll.json");
        assert_eq!(config, UnrollConfig::default());
    }

    #[test]
    fn test_load_malformed_file_falls_back_to_defaults() {
        let path = scratch_file("malformed.json", r#"{"placeholder_prefix": 7"#);
        assert_eq!(UnrollConfig::load_from_file(&path), UnrollConfig::default());
    }

    #[test]
    fn test_try_load_reports_errors() {
        let err = UnrollConfig::try_load_from_file("/nonexistent/unroll.json").unwrap_err();
        assert_eq!(err.code(), ConfigErrorCodes::IO_FAILED);

        let path = scratch_file("broken.json", "{ not json");
        let err = UnrollConfig::try_load_from_file(&path).unwrap_err();
        assert_eq!(err.code(), ConfigErrorCodes::PARSE_FAILED);

        let path = scratch_file("empty_prefix.json", r#"{"placeholder_prefix": ""}"#);
        let err = UnrollConfig::try_load_from_file(&path).unwrap_err();
        assert_eq!(err, ConfigError::EmptyPrefix);
        assert_eq!(UnrollConfig::load_from_file(&path), UnrollConfig::default());
    }

    #[test]
    fn test_load_valid_file() {
        let path = scratch_file("valid.json", r#"{"placeholder_prefix": "$"}"#);
        let config = UnrollConfig::load_from_file(&path);
        assert_eq!(config.placeholder_prefix, "$");
    }
}
