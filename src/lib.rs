//! # rust-life
//!
//! Conway's Game of Life with a bounded, time-ordered frame history.
//!
//! ## Design Principles
//!
//! 1. **Immutable Frames**: A `GridSnapshot` is built once (seeded or
//!    derived from its predecessor) and never mutated. Clones share cells.
//!
//! 2. **Explicit Outcomes**: `Automaton::advance` returns `Advanced`,
//!    `Paused` or `Terminated`. Extinction and backpressure are outcomes,
//!    not errors.
//!
//! 3. **Deterministic Seeding**: Randomized placements draw from a seedable
//!    `LifeRng` passed in by the caller; nothing reads ambient randomness.
//!
//! 4. **No Pacing in the Core**: The engine never sleeps. The `driver`
//!    module supplies a reference loop with delay, cancellation and restart.
//!
//! ## Architecture
//!
//! - **Dead Border**: The outermost ring of cells is permanently dead; only
//!   the interior evolves under B3/S23.
//!
//! - **Persistent History**: Frames live in an `im::Vector`, so readers get
//!   an O(1), immutable copy of the whole window.
//!
//! ## Modules
//!
//! - `core`: RNG, errors, configuration
//! - `grid`: Snapshots, the transition rule, noise
//! - `placement`: Seed-frame strategies
//! - `automaton`: History, controller, shared handle
//! - `driver`: Paced step loop
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod grid;
pub mod placement;
pub mod automaton;
pub mod driver;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{AutomatonConfig, LifeError, LifeRng};

pub use crate::grid::{neighbor_count, transition, GridSnapshot};

pub use crate::placement::Placement;

pub use crate::automaton::{Automaton, History, SharedAutomaton, StepOutcome};

pub use crate::driver::{Driver, DriverConfig, RunSummary, StopReason};
