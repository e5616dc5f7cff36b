//! Core engine types: RNG, errors, configuration.
//!
//! These are shared by every other module and carry no automaton logic.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{AutomatonConfig, MIN_DIMENSION};
pub use error::LifeError;
pub use rng::LifeRng;
