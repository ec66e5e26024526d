//! Thread-safe simulator handle.
//!
//! [`SharedSimulator`] serializes every mutation through one mutex so that a run loop on
//! a worker thread and a controller on another never observe a partial step.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::sim::control::{CancelToken, RunOutcome, StepObserver, StepOutcome};
use crate::sim::simulator::Simulator;
use crate::sim::trace::StateSnapshot;

/// Cloneable handle to a simulator behind a mutex.
#[derive(Clone, Debug, Default)]
pub struct SharedSimulator(Arc<Mutex<Simulator>>);

impl SharedSimulator {
    /// Wraps a simulator.
    pub fn new(sim: Simulator) -> Self {
        Self(Arc::new(Mutex::new(sim)))
    }

    /// A panic while holding the lock leaves the simulator between steps, so the guard is
    /// recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, Simulator> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with exclusive access to the simulator.
    pub fn with<R>(&self, f: impl FnOnce(&mut Simulator) -> R) -> R {
        f(&mut self.lock())
    }

    /// See [`Simulator::load`].
    pub fn load(&self, text: &str) -> usize {
        self.lock().load(text)
    }

    /// See [`Simulator::reset`].
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// See [`Simulator::step`].
    pub fn step(&self) -> StepOutcome {
        self.lock().step()
    }

    /// See [`Simulator::snapshot`].
    pub fn snapshot(&self) -> StateSnapshot {
        self.lock().snapshot()
    }

    /// Continuous run that holds the lock for one step at a time.
    ///
    /// The observer is called and the run delay is slept with the lock released, so
    /// other handles can take snapshots or cancel between steps.
    pub fn run(&self, cancel: &CancelToken, observer: &mut impl StepObserver) -> RunOutcome {
        let delay = self.lock().config().general.run_delay();
        loop {
            let (outcome, complete) = {
                let mut sim = self.lock();
                if let Some(outcome) = sim.run_gate(cancel) {
                    return outcome;
                }
                (sim.step(), sim.is_complete())
            };
            if let Some(report) = outcome.report() {
                observer.on_step(report);
            }
            if !complete {
                let _ = cancel.wait(delay);
            }
        }
    }
}
