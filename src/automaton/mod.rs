//! The automaton controller and its frame history.
//!
//! - `History`: bounded, ordered frame window with the eviction policy
//! - `Automaton`: seeds, steps, detects extinction
//! - `StepOutcome`: `Advanced`, `Paused`, or `Terminated`
//! - `SharedAutomaton`: lock-guarded handle for a stepper plus readers

mod controller;
mod history;
mod shared;

pub use controller::{Automaton, StepOutcome};
pub use history::History;
pub use shared::SharedAutomaton;
