//! Drivers for deferred test outcomes.
//!
//! A single-argument test that returns [`crate::adapter::Outcome::Deferred`]
//! needs something to poll its future before the completion callback can
//! fire. Registration does not poll anything itself; the case body hands the
//! future to a [`Spawn`] implementation.

use futures::future::BoxFuture;
use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

/// Runtime for deferred cases started outside any tokio runtime.
///
/// Built on first use with a single worker so the caller's thread is never
/// used to poll deferred work.
static FALLBACK_RUNTIME: Lazy<Option<Runtime>> = Lazy::new(|| {
    match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("unroll-deferred")
        .enable_all()
        .build()
    {
        Ok(runtime) => Some(runtime),
        Err(err) => {
            tracing::error!(error = %err, "failed to start runtime for deferred cases");
            None
        }
    }
});

/// Something that can drive a detached future to completion.
pub trait Spawn: Send + Sync {
    fn spawn(&self, task: BoxFuture<'static, ()>);
}

impl<F> Spawn for F
where
    F: Fn(BoxFuture<'static, ()>) + Send + Sync,
{
    fn spawn(&self, task: BoxFuture<'static, ()>) {
        self(task)
    }
}

/// Spawns onto the tokio runtime of the calling thread.
///
/// Outside a runtime the future goes to a crate-owned background runtime, so
/// `spawn` always returns before the deferred case settles. If that runtime
/// cannot be started the task is dropped, and with it the case's `Done`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSpawner;

impl Spawn for TokioSpawner {
    fn spawn(&self, task: BoxFuture<'static, ()>) {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(task);
            }
            Err(_) => match FALLBACK_RUNTIME.as_ref() {
                Some(runtime) => {
                    tracing::debug!("no tokio runtime active, deferring case to background runtime");
                    runtime.spawn(task);
                }
                None => {
                    tracing::warn!("no runtime available, deferred case will never complete");
                }
            },
        }
    }
}
