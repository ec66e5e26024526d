//! Simulation driver.
//!
//! Provides program assembly and sequencing, the [`Simulator`] that steps a program
//! against the machine state, run-loop control, the execution trace, and a
//! thread-safe handle.

/// Run-loop cancellation, outcomes, and step observers.
pub mod control;

/// Program assembly and cursor.
pub mod program;

/// Thread-safe simulator handle.
pub mod shared;

/// The simulator driver.
pub mod simulator;

/// Execution log, step reports, and snapshots.
pub mod trace;

pub use control::{CancelToken, RunOutcome, StepObserver, StepOutcome};
pub use program::{Program, SAMPLE_PROGRAM};
pub use shared::SharedSimulator;
pub use simulator::Simulator;
pub use trace::{ExecutionLog, LogEntry, LogKind, StateSnapshot, StepReport};
