//! Completion adapter: one calling convention for three styles of test.
//!
//! Test authors pick a style explicitly when building a [`TestFn`]:
//!
//! - [`TestFn::single`]: takes the fixture and returns an [`Outcome`].
//!   `Outcome::Immediate` completes the case as soon as the function returns;
//!   `Outcome::Deferred` completes it when the future settles, forwarding an
//!   `Err` as the failure reason.
//! - [`TestFn::deferred`]: shorthand for a single-argument function returning
//!   a future.
//! - [`TestFn::with_done`]: takes the completion callback first, then the
//!   fixture, and is responsible for firing the callback itself.
//!
//! Panics raised by a single-argument function are not caught here; they
//! unwind through the case body into whatever invoked it. A panic while a
//! deferred future is polled is different: nothing up the stack belongs to
//! the caller any more, so it is reported through `Done` as a failure.

use std::any::Any;
use std::fmt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;

use crate::completion::{CaseResult, Done};
use crate::fixture::Fixture;
use crate::spawn::Spawn;

/// Result of invoking a single-argument test function.
pub enum Outcome {
    /// The test finished when the function returned.
    Immediate,
    /// The test finishes when this future resolves.
    Deferred(BoxFuture<'static, CaseResult>),
}

impl Outcome {
    pub fn deferred<Fut, E>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Into<anyhow::Error> + 'static,
    {
        Outcome::Deferred(
            future
                .map(|result| -> CaseResult { result.map_err(Into::into) })
                .boxed(),
        )
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Outcome::Deferred(_))
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Immediate => f.write_str("Immediate"),
            Outcome::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Conversion from a single-argument test's return value.
pub trait IntoOutcome {
    fn into_outcome(self) -> Outcome;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Outcome {
        Outcome::Immediate
    }
}

impl IntoOutcome for Outcome {
    fn into_outcome(self) -> Outcome {
        self
    }
}

type SingleFn = dyn Fn(Fixture) -> Outcome + Send + Sync;
type CallbackFn = dyn Fn(Done, Fixture) + Send + Sync;

/// A test function in one of the two supported shapes.
#[derive(Clone)]
pub enum TestFn {
    /// Receives only the fixture.
    Single(Arc<SingleFn>),
    /// Receives the completion callback, then the fixture.
    WithDone(Arc<CallbackFn>),
}

impl TestFn {
    pub fn single<F, R>(test: F) -> Self
    where
        F: Fn(Fixture) -> R + Send + Sync + 'static,
        R: IntoOutcome,
    {
        TestFn::Single(Arc::new(move |fixture| test(fixture).into_outcome()))
    }

    pub fn deferred<F, Fut, E>(test: F) -> Self
    where
        F: Fn(Fixture) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), E>> + Send + 'static,
        E: Into<anyhow::Error> + 'static,
    {
        TestFn::Single(Arc::new(move |fixture| Outcome::deferred(test(fixture))))
    }

    pub fn with_done<F>(test: F) -> Self
    where
        F: Fn(Done, Fixture) + Send + Sync + 'static,
    {
        TestFn::WithDone(Arc::new(test))
    }

    pub fn takes_done(&self) -> bool {
        matches!(self, TestFn::WithDone(_))
    }

    /// Invoke the test for one fixture and route its completion to `done`.
    pub fn run(&self, fixture: Fixture, done: Done, spawner: &dyn Spawn) {
        match self {
            TestFn::Single(test) => match test(fixture) {
                Outcome::Immediate => done.ok(),
                Outcome::Deferred(pending) => spawner.spawn(
                    async move {
                        let result = match AssertUnwindSafe(pending).catch_unwind().await {
                            Ok(result) => result,
                            Err(payload) => Err(anyhow::anyhow!(
                                "deferred case panicked: {}",
                                panic_message(payload.as_ref())
                            )),
                        };
                        if let Err(err) = &result {
                            tracing::debug!(error = %err, "deferred case rejected");
                        }
                        done.complete(result);
                    }
                    .boxed(),
                ),
            },
            TestFn::WithDone(test) => test(done, fixture),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}

impl fmt::Debug for TestFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestFn::Single(_) => f.write_str("TestFn::Single(..)"),
            TestFn::WithDone(_) => f.write_str("TestFn::WithDone(..)"),
        }
    }
}
