use std::sync::{Arc, Mutex, MutexGuard};

use futures::future::BoxFuture;

use crate::completion::{CaseResult, Done};
use crate::spawn::Spawn;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Completion stub that records every result it receives.
#[derive(Debug, Clone, Default)]
pub struct CompletionProbe {
    results: Arc<Mutex<Vec<Option<String>>>>,
}

impl CompletionProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh completion callback reporting into this probe.
    pub fn done(&self) -> Done {
        let results = Arc::clone(&self.results);
        Done::new(move |result: CaseResult| {
            lock(&results).push(result.err().map(|err| err.to_string()));
        })
    }

    /// Number of completions observed so far, successful or not.
    pub fn completed(&self) -> usize {
        lock(&self.results).len()
    }

    pub fn succeeded(&self) -> usize {
        lock(&self.results).iter().filter(|r| r.is_none()).count()
    }

    pub fn errors(&self) -> usize {
        lock(&self.results).iter().filter(|r| r.is_some()).count()
    }

    /// Failure messages, in completion order.
    pub fn messages(&self) -> Vec<String> {
        lock(&self.results).iter().flatten().cloned().collect()
    }
}

/// Spawner that parks deferred work until [`ManualSpawner::run_pending`].
#[derive(Clone, Default)]
pub struct ManualSpawner {
    queue: Arc<Mutex<Vec<BoxFuture<'static, ()>>>>,
}

impl ManualSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        lock(&self.queue).len()
    }

    /// Drive every queued future to completion on the calling thread and
    /// return how many ran. Work queued while running is picked up too.
    pub fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            let batch: Vec<_> = lock(&self.queue).drain(..).collect();
            if batch.is_empty() {
                return ran;
            }
            for task in batch {
                futures::executor::block_on(task);
                ran += 1;
            }
        }
    }
}

impl Spawn for ManualSpawner {
    fn spawn(&self, task: BoxFuture<'static, ()>) {
        lock(&self.queue).push(task);
    }
}

impl std::fmt::Debug for ManualSpawner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualSpawner")
            .field("pending", &self.pending())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_counts_successes_and_failures() {
        let probe = CompletionProbe::new();
        probe.done().ok();
        probe.done().fail(anyhow::anyhow!("first"));
        probe.done().fail(anyhow::anyhow!("second"));

        assert_eq!(probe.completed(), 3);
        assert_eq!(probe.succeeded(), 1);
        assert_eq!(probe.errors(), 2);
        assert_eq!(probe.messages(), ["first", "second"]);
    }

    #[test]
    fn test_manual_spawner_holds_work_until_run() {
        let spawner = ManualSpawner::new();
        let probe = CompletionProbe::new();
        let done = probe.done();
        spawner.spawn(Box::pin(async move { done.ok() }));

        assert_eq!(spawner.pending(), 1);
        assert_eq!(probe.completed(), 0);

        assert_eq!(spawner.run_pending(), 1);
        assert_eq!(spawner.pending(), 0);
        assert_eq!(probe.completed(), 1);
    }
}
