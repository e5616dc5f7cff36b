//! Automaton configuration.
//!
//! `AutomatonConfig` carries every knob an outer layer (CLI, Python, a
//! config file) can set. The engine validates it on `initialize`/`reset`;
//! `delay_ms` is carried for the driver and never read by the engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::LifeError;
use crate::placement::Placement;

/// Smallest grid side with at least one interior cell.
pub const MIN_DIMENSION: usize = 3;

/// Complete configuration for one automaton run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomatonConfig {
    /// Grid width in cells (including the dead border).
    pub width: usize,

    /// Grid height in cells (including the dead border).
    pub height: usize,

    /// How the seed frame is populated.
    pub placement: Placement,

    /// Maximum number of retained frames.
    pub max_frames: usize,

    /// Discard the oldest frames when over capacity (otherwise pause).
    pub scroll_on_overflow: bool,

    /// Delay between steps in milliseconds. Consumed by the driver only.
    pub delay_ms: u64,

    /// Seed for the run's random stream.
    pub seed: u64,
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            width: 25,
            height: 25,
            placement: Placement::default(),
            max_frames: 25,
            scroll_on_overflow: true,
            delay_ms: 50,
            seed: 42,
        }
    }
}

impl AutomatonConfig {
    /// Create a config with the given dimensions and default everything else.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Set the placement strategy.
    #[must_use]
    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the frame cap.
    #[must_use]
    pub fn with_max_frames(mut self, max_frames: usize) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Set the overflow policy.
    #[must_use]
    pub fn with_scroll_on_overflow(mut self, scroll: bool) -> Self {
        self.scroll_on_overflow = scroll;
        self
    }

    /// Set the step delay.
    #[must_use]
    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Step delay as a `Duration`.
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Check that the configuration describes a runnable automaton.
    pub fn validate(&self) -> Result<(), LifeError> {
        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION {
            return Err(LifeError::invalid(format!(
                "grid must be at least {MIN_DIMENSION}x{MIN_DIMENSION}, got {}x{}",
                self.width, self.height
            )));
        }
        self.width.checked_mul(self.height).ok_or_else(|| {
            LifeError::invalid(format!("grid {}x{} is too large", self.width, self.height))
        })?;
        if self.max_frames < 1 {
            return Err(LifeError::invalid("max_frames must be at least 1"));
        }
        self.placement.validate()
    }

    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, LifeError> {
        serde_json::from_str(json).map_err(|e| LifeError::ConfigLoad(e.to_string()))
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, LifeError> {
        serde_json::to_string_pretty(self).map_err(|e| LifeError::ConfigLoad(e.to_string()))
    }
}
