//! The seam between this crate and the host test framework.
//!
//! A [`Registrar`] receives one `(description, body)` pair per fixture and
//! decides when, where and whether the body runs. Any
//! `FnMut(String, CaseBody)` closure is a registrar, which is enough to bridge
//! into most harnesses or to collect cases in a `Vec`.

use std::fmt;

use crate::completion::Done;

/// Entry point for one registered case.
///
/// Running the body invokes the test function for its fixture and eventually
/// fires the supplied [`Done`].
pub struct CaseBody {
    run: Box<dyn FnOnce(Done) + Send>,
}

impl CaseBody {
    pub fn new<F>(run: F) -> Self
    where
        F: FnOnce(Done) + Send + 'static,
    {
        Self { run: Box::new(run) }
    }

    pub fn run(self, done: Done) {
        (self.run)(done)
    }
}

impl fmt::Debug for CaseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseBody").finish_non_exhaustive()
    }
}

/// Host-side case registration.
pub trait Registrar {
    fn register(&mut self, description: String, body: CaseBody);
}

impl<F> Registrar for F
where
    F: FnMut(String, CaseBody),
{
    fn register(&mut self, description: String, body: CaseBody) {
        self(description, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_registrar_receives_cases() {
        let mut seen = Vec::new();
        let mut registrar = |description: String, body: CaseBody| seen.push((description, body));
        registrar.register("first".to_string(), CaseBody::new(|done| done.ok()));
        registrar.register("second".to_string(), CaseBody::new(|done| done.ok()));

        let descriptions: Vec<&str> = seen.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(descriptions, ["first", "second"]);
    }

    #[test]
    fn test_body_runs_with_supplied_done() {
        let body = CaseBody::new(|done| done.fail(anyhow::anyhow!("nope")));
        let (done, mut rx) = Done::channel();
        body.run(done);
        let err = rx.try_recv().unwrap().unwrap_err();
        assert_eq!(err.to_string(), "nope");
    }
}
