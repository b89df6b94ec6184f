//! Completion callback handed to every registered case body.
//!
//! [`Done`] is consumed when it fires, so a case can complete at most once.
//! A case whose `Done` is never fired stays pending; nothing in this crate
//! times it out.

use std::fmt;

use tokio::sync::oneshot;

/// Outcome reported through a completion callback.
pub type CaseResult = anyhow::Result<()>;

/// Single-use completion callback.
pub struct Done {
    callback: Box<dyn FnOnce(CaseResult) + Send>,
}

impl Done {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnOnce(CaseResult) + Send + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    /// A completion callback paired with a receiver that resolves when it fires.
    ///
    /// If the `Done` is dropped without firing, the receiver resolves with
    /// `RecvError`.
    pub fn channel() -> (Self, oneshot::Receiver<CaseResult>) {
        let (tx, rx) = oneshot::channel();
        let done = Self::new(move |result| {
            // Receiver may have been dropped by a registrar that stopped waiting.
            let _ = tx.send(result);
        });
        (done, rx)
    }

    /// Complete without error.
    pub fn ok(self) {
        self.complete(Ok(()));
    }

    /// Complete with `err` as the failure reason.
    pub fn fail(self, err: impl Into<anyhow::Error>) {
        self.complete(Err(err.into()));
    }

    pub fn complete(self, result: CaseResult) {
        (self.callback)(result)
    }
}

impl fmt::Debug for Done {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Done").finish_non_exhaustive()
    }
}
