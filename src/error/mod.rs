// Error types for the unroll helper
//
// Fixture loading and configuration are the only fallible operations in the
// crate. Test-case failures are not modelled here: they travel through the
// completion callback as `anyhow::Error` values.

mod config;
mod fixture;

pub use config::{ConfigError, ConfigErrorCodes};
pub use fixture::{log_fixture_error, FixtureError, FixtureErrorCodes};

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, so callers can branch on a stable number
/// instead of matching display strings.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}
