//! Parameterized test registration.
//!
//! [`unroll`] takes a description template, a test function and a list of
//! fixtures, and registers one case per fixture with a caller-supplied
//! [`Registrar`]. `#field` placeholders in the description are replaced with
//! the fixture's values, so `"#input->#output"` becomes `"foo->bar"` for
//! `{"input": "foo", "output": "bar"}`.
//!
//! Test functions come in three styles, chosen when the [`TestFn`] is built:
//! plain synchronous functions, functions returning a future, and functions
//! that take a [`Done`] callback and fire it themselves. Every registered
//! [`CaseBody`] exposes the same entry point regardless of style: run it with
//! a `Done` and wait for that `Done` to fire.
//!
//! Execution belongs to the registrar. This crate never schedules, orders or
//! times out cases.

// Module declarations
pub mod adapter;
pub mod completion;
pub mod config;
pub mod description;
pub mod dispatch;
pub mod error;
pub mod fixture;
pub mod registrar;
pub mod spawn;
pub mod testing;

// Re-exports for convenience
pub use adapter::{IntoOutcome, Outcome, TestFn};
pub use completion::{CaseResult, Done};
pub use config::UnrollConfig;
pub use description::{render_description, render_description_with_prefix};
pub use dispatch::{unroll, Unroll};
pub use error::{ConfigError, ErrorCode, FixtureError};
pub use fixture::{fixtures_from_json, load_fixtures, render_value, Fixture};
pub use registrar::{CaseBody, Registrar};
pub use spawn::{Spawn, TokioSpawner};
