// Fixture error types and constants

use crate::error::ErrorCode;
use log::error;
use std::fmt;
use std::path::PathBuf;

/// Fixture error code constants
///
/// Error code range: 3001-3004
pub struct FixtureErrorCodes {}

impl FixtureErrorCodes {
    /// Fixture document was valid JSON but not an array
    pub const NOT_AN_ARRAY: i32 = 3001;

    /// Fixture document could not be parsed as JSON
    pub const PARSE_FAILED: i32 = 3002;

    /// Fixture file could not be read
    pub const IO_FAILED: i32 = 3003;

    /// A typed fixture could not be converted into a JSON value
    pub const SERIALIZE_FAILED: i32 = 3004;
}

/// Log a fixture error with structured context
///
/// The logging is non-blocking and will not panic on failure.
pub fn log_fixture_error(err: &FixtureError, context: &str) {
    error!(
        "Fixture error in {}: code={}, component=FixtureLoader, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Fixture loading and conversion errors
///
/// Error code range: 3001-3004
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureError {
    /// The fixture document's top level was not a JSON array
    NotAnArray { found: String },

    /// The fixture document was not valid JSON
    Parse { reason: String },

    /// The fixture file could not be read
    Io { path: PathBuf, reason: String },

    /// A typed fixture failed to serialize
    Serialize { reason: String },
}

impl ErrorCode for FixtureError {
    fn code(&self) -> i32 {
        match self {
            FixtureError::NotAnArray { .. } => FixtureErrorCodes::NOT_AN_ARRAY,
            FixtureError::Parse { .. } => FixtureErrorCodes::PARSE_FAILED,
            FixtureError::Io { .. } => FixtureErrorCodes::IO_FAILED,
            FixtureError::Serialize { .. } => FixtureErrorCodes::SERIALIZE_FAILED,
        }
    }

    fn message(&self) -> String {
        match self {
            FixtureError::NotAnArray { found } => {
                format!("Fixture document must be a JSON array (got {})", found)
            }
            FixtureError::Parse { reason } => {
                format!("Failed to parse fixture JSON: {}", reason)
            }
            FixtureError::Io { path, reason } => {
                format!("Failed to read fixture file {}: {}", path.display(), reason)
            }
            FixtureError::Serialize { reason } => {
                format!("Failed to serialize fixture: {}", reason)
            }
        }
    }
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FixtureError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for FixtureError {}

impl From<serde_json::Error> for FixtureError {
    fn from(err: serde_json::Error) -> Self {
        FixtureError::Parse {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_error_codes() {
        assert_eq!(
            FixtureError::NotAnArray {
                found: "object".to_string()
            }
            .code(),
            FixtureErrorCodes::NOT_AN_ARRAY
        );
        assert_eq!(
            FixtureError::Parse {
                reason: "test".to_string()
            }
            .code(),
            FixtureErrorCodes::PARSE_FAILED
        );
        assert_eq!(
            FixtureError::Io {
                path: PathBuf::from("cases.json"),
                reason: "test".to_string()
            }
            .code(),
            FixtureErrorCodes::IO_FAILED
        );
        assert_eq!(
            FixtureError::Serialize {
                reason: "test".to_string()
            }
            .code(),
            FixtureErrorCodes::SERIALIZE_FAILED
        );
    }

    #[test]
    fn test_fixture_error_display() {
        let err = FixtureError::Io {
            path: PathBuf::from("cases.json"),
            reason: "not found".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("3003"));
        assert!(text.contains("cases.json"));
        assert!(text.contains("not found"));
    }

    #[test]
    fn test_serde_error_conversion() {
        let serde_err = serde_json::from_str::<serde_json::Value>("[1,").unwrap_err();
        let err: FixtureError = serde_err.into();
        assert!(matches!(err, FixtureError::Parse { .. }));
    }
}
