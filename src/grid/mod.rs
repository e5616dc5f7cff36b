//! Grid snapshots and the Life transition.
//!
//! - `GridSnapshot`: immutable `width x height` boolean frame
//! - `transition`: successor of a snapshot under B3/S23 with a dead border
//! - `perlin2`: smooth noise used by the `Noise` placement

pub mod noise;
pub mod rules;
pub mod snapshot;

pub use noise::perlin2;
pub use rules::{neighbor_count, next_state, transition, BIRTH, SURVIVAL};
pub use snapshot::GridSnapshot;
