//! Run-loop control.
//!
//! Provides the cooperative cancellation signal for continuous runs, the outcomes of
//! `step` and `run`, and the observer hook invoked after every executed instruction.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use crate::sim::trace::StepReport;

/// Granularity of the interruptible sleep in [`CancelToken::wait`].
const WAIT_SLICE: Duration = Duration::from_millis(10);

/// Cloneable cancellation signal shared between a run loop and its controller.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates an un-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Takes effect at the next yield point.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Clears a previous cancellation so the token can be reused.
    pub fn rearm(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Sleeps for `delay`, returning early if cancelled.
    ///
    /// Returns `true` when the full delay elapsed without cancellation.
    pub fn wait(&self, delay: Duration) -> bool {
        let deadline = Instant::now() + delay;
        loop {
            if self.is_cancelled() {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            thread::sleep(WAIT_SLICE.min(deadline - now));
        }
    }
}

/// Why a continuous run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every instruction was executed.
    Completed,
    /// The cancel token was triggered.
    Cancelled,
    /// The configured cycle cap was reached.
    CycleLimit,
}

/// Result of a single step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// One instruction was executed.
    Executed(Box<StepReport>),
    /// Nothing left to execute; state was not touched.
    Finished,
}

impl StepOutcome {
    /// The step report, if an instruction was executed.
    pub fn report(&self) -> Option<&StepReport> {
        match self {
            Self::Executed(report) => Some(report),
            Self::Finished => None,
        }
    }

    /// Returns `true` if nothing was executed.
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

/// Receives a report after every instruction of a continuous run.
pub trait StepObserver {
    /// Called once per executed instruction, after the state has been updated.
    fn on_step(&mut self, report: &StepReport);
}

impl<F> StepObserver for F
where
    F: FnMut(&StepReport),
{
    fn on_step(&mut self, report: &StepReport) {
        self(report);
    }
}
