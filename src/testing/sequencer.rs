//! Sequential "run all" driver.
//!
//! `Sequencer` is a small step machine: the GUI feeds it one message per
//! finished pause, while `run_to_completion` drives the same machine in a
//! plain async loop for headless runs. Either way at most one test is in
//! flight and every execution is followed by the fixed pause.

use std::future::Future;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use super::case::{Outcome, TestCase};
use super::store::TestStore;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    pub fn label(&self) -> String {
        format!("Processing Test {} of {}", self.current + 1, self.total)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Sequencer {
    progress: Option<Progress>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a run over `total` tests and return the first index to execute.
    ///
    /// Returns `None` when a run is already in progress or there is nothing
    /// to run; neither case changes state.
    pub fn start(&mut self, total: usize) -> Option<usize> {
        if self.is_busy() || total == 0 {
            return None;
        }
        self.progress = Some(Progress { current: 0, total });
        Some(0)
    }

    /// Move past the test that just finished (and its pause).
    ///
    /// Returns the next index, or `None` once the last test is done, at which
    /// point progress is cleared and the busy flag drops.
    pub fn advance(&mut self) -> Option<usize> {
        let progress = self.progress?;
        let next = progress.current + 1;
        if next < progress.total {
            self.progress = Some(Progress {
                current: next,
                ..progress
            });
            Some(next)
        } else {
            self.progress = None;
            None
        }
    }

    pub fn is_busy(&self) -> bool {
        self.progress.is_some()
    }

    pub fn progress(&self) -> Option<Progress> {
        self.progress
    }
}

/// Totals for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u128,
}

/// Execute every test in store order, pausing `delay` after each one.
///
/// Failures never stop the run. Returns immediately with an empty summary if
/// `sequencer` is already busy.
pub async fn run_to_completion<F, Fut>(
    store: &mut TestStore,
    sequencer: &mut Sequencer,
    delay: Duration,
    mut execute: F,
) -> RunSummary
where
    F: FnMut(usize, TestCase) -> Fut,
    Fut: Future<Output = Outcome>,
{
    let started = Instant::now();
    let revision = store.revision();
    let mut summary = RunSummary::default();

    let mut next = sequencer.start(store.len());
    while let Some(index) = next {
        let Some(case) = store.get(index).cloned() else {
            break;
        };
        if let Some(progress) = sequencer.progress() {
            debug!("{}", progress.label());
        }

        let outcome = execute(index, case).await;
        summary.total += 1;
        match outcome {
            Outcome::Success(_) => summary.passed += 1,
            Outcome::Failure(_) => summary.failed += 1,
        }
        store.record(revision, index, &outcome);

        tokio::time::sleep(delay).await;
        next = sequencer.advance();
    }

    summary.duration_ms = started.elapsed().as_millis();
    info!(
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        "run finished"
    );
    summary
}
