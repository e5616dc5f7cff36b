//! Seed-frame placement strategies.
//!
//! A placement is a pure function of grid coordinates to an initial cell
//! value. `Noise` and `Random` draw their per-run randomness from the
//! `LifeRng` passed in; `Glider` and `LightweightSpaceship` are fixed
//! patterns and never touch it.

mod strategy;

pub use strategy::{Placement, NOISE_OFFSET_RANGE};
