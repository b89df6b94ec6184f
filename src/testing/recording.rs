use crate::completion::Done;
use crate::registrar::{CaseBody, Registrar};

/// One `(description, body)` pair captured by [`RecordingRegistrar`].
#[derive(Debug)]
pub struct RecordedCase {
    pub description: String,
    pub body: Option<CaseBody>,
}

/// Registrar that keeps every registered case, in registration order.
#[derive(Debug, Default)]
pub struct RecordingRegistrar {
    cases: Vec<RecordedCase>,
}

impl RecordingRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    pub fn cases(&self) -> &[RecordedCase] {
        &self.cases
    }

    pub fn descriptions(&self) -> Vec<&str> {
        self.cases
            .iter()
            .map(|case| case.description.as_str())
            .collect()
    }

    /// Take the body registered at `index`. Each body can be taken once.
    pub fn take_body(&mut self, index: usize) -> Option<CaseBody> {
        self.cases.get_mut(index).and_then(|case| case.body.take())
    }

    /// Run every body that has not been taken yet, in order, handing each a
    /// completion callback from `make_done`.
    pub fn run_all<F>(&mut self, mut make_done: F) -> usize
    where
        F: FnMut() -> Done,
    {
        let mut ran = 0;
        for case in &mut self.cases {
            if let Some(body) = case.body.take() {
                body.run(make_done());
                ran += 1;
            }
        }
        ran
    }
}

impl Registrar for RecordingRegistrar {
    fn register(&mut self, description: String, body: CaseBody) {
        self.cases.push(RecordedCase {
            description,
            body: Some(body),
        });
    }
}
