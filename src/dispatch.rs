//! Fixture dispatcher: one registration per fixture, in fixture order.

use std::fmt;
use std::sync::Arc;

use crate::adapter::TestFn;
use crate::config::UnrollConfig;
use crate::description::render_description_with_prefix;
use crate::fixture::Fixture;
use crate::registrar::{CaseBody, Registrar};
use crate::spawn::{Spawn, TokioSpawner};

/// Register one case per fixture with `registrar`.
///
/// Descriptions are rendered with [`UnrollConfig::default`] and deferred
/// outcomes are driven by [`TokioSpawner`]. Environment overrides only apply
/// through [`Unroll::config`], e.g. `.config(UnrollConfig::from_env())`.
///
/// ```
/// use unroll::{unroll, CaseBody, TestFn};
/// use serde_json::json;
///
/// let mut names = Vec::new();
/// unroll(
///     "doubles #n",
///     TestFn::single(|fixture| {
///         let n: i64 = fixture.get_as("n").unwrap();
///         assert_eq!(n * 2, n + n);
///     }),
///     [json!({"n": 1}), json!({"n": 2})],
///     &mut |description: String, _body: CaseBody| names.push(description),
/// );
/// assert_eq!(names, ["doubles 1", "doubles 2"]);
/// ```
pub fn unroll<I, R>(description: &str, test_fn: TestFn, fixtures: I, registrar: &mut R)
where
    I: IntoIterator,
    I::Item: Into<Fixture>,
    R: Registrar + ?Sized,
{
    Unroll::new(description, test_fn).register(fixtures, registrar);
}

/// Configurable form of [`unroll`].
#[derive(Clone)]
pub struct Unroll {
    description: String,
    test_fn: TestFn,
    config: UnrollConfig,
    spawner: Arc<dyn Spawn>,
}

impl Unroll {
    pub fn new(description: impl Into<String>, test_fn: TestFn) -> Self {
        Self {
            description: description.into(),
            test_fn,
            config: UnrollConfig::default(),
            spawner: Arc::new(TokioSpawner),
        }
    }

    pub fn config(mut self, config: UnrollConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the driver used for deferred outcomes.
    pub fn spawner(mut self, spawner: Arc<dyn Spawn>) -> Self {
        self.spawner = spawner;
        self
    }

    /// Render the description for one fixture.
    pub fn render(&self, fixture: &Fixture) -> String {
        render_description_with_prefix(&self.description, fixture, &self.config.placeholder_prefix)
    }

    /// Descriptions the fixtures would be registered under, without registering.
    pub fn describe<I>(&self, fixtures: I) -> Vec<String>
    where
        I: IntoIterator,
        I::Item: Into<Fixture>,
    {
        fixtures
            .into_iter()
            .map(|fixture| self.render(&fixture.into()))
            .collect()
    }

    /// Register one case per fixture and return how many were registered.
    pub fn register<I, R>(&self, fixtures: I, registrar: &mut R) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Fixture>,
        R: Registrar + ?Sized,
    {
        let mut count = 0;
        for (index, fixture) in fixtures.into_iter().enumerate() {
            let fixture: Fixture = fixture.into();
            let description = self.render(&fixture);
            if self.config.trace_registrations {
                tracing::info!(index, description = %description, "registering case");
            } else {
                tracing::debug!(index, description = %description, "registering case");
            }

            let test_fn = self.test_fn.clone();
            let spawner = Arc::clone(&self.spawner);
            registrar.register(
                description,
                CaseBody::new(move |done| test_fn.run(fixture, done, &*spawner)),
            );
            count += 1;
        }
        count
    }
}

impl fmt::Debug for Unroll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unroll")
            .field("description", &self.description)
            .field("test_fn", &self.test_fn)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
