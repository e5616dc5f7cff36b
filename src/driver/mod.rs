//! Reference driver for the automaton.
//!
//! The engine never sleeps or loops on its own. `Driver` supplies the outer
//! loop a host application would otherwise write: a paced step loop with a
//! cancellation flag, a step limit, and restart with fresh randomness.

mod runner;

pub use runner::{Driver, DriverConfig, RunSummary, StopReason};
