//! Test doubles for exercising unrolled cases without a host framework.
//!
//! [`RecordingRegistrar`] stands in for the host's registration function,
//! [`CompletionProbe`] stands in for the completion callback the host would
//! pass to a case body, and [`ManualSpawner`] holds deferred outcomes until a
//! test chooses to drive them.

pub mod probe;
pub mod recording;

pub use probe::{CompletionProbe, ManualSpawner};
pub use recording::{RecordedCase, RecordingRegistrar};

use once_cell::sync::OnceCell;

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a `tracing` fmt subscriber writing through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_test_logging() {
    LOGGING.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}
