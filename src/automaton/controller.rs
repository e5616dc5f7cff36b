//! Automaton controller: seeding, stepping, retention, termination.
//!
//! `advance` is a synchronous state machine. It never sleeps or blocks; the
//! caller owns the loop, the pacing delay, and cancellation.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::history::History;
use crate::core::{AutomatonConfig, LifeError, LifeRng};
use crate::grid::{transition, GridSnapshot};
use crate::placement::Placement;

/// Result of one `advance` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepOutcome {
    /// A new frame was committed; carries the retained length afterwards.
    Advanced(usize),
    /// Over capacity with scrolling off; nothing was computed. Carries the
    /// retained length.
    Paused(usize),
    /// The next frame would have no live cells. Nothing was appended and
    /// stepping is over until `reset`.
    Terminated,
}

impl StepOutcome {
    /// True for `Advanced`.
    #[must_use]
    pub fn is_advanced(&self) -> bool {
        matches!(self, StepOutcome::Advanced(_))
    }

    /// True for `Paused`.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        matches!(self, StepOutcome::Paused(_))
    }

    /// True for `Terminated`.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        matches!(self, StepOutcome::Terminated)
    }
}

/// Game of Life automaton with a bounded frame history.
///
/// ## Example
///
/// ```
/// use rust_life::automaton::{Automaton, StepOutcome};
/// use rust_life::core::{AutomatonConfig, LifeRng};
/// use rust_life::placement::Placement;
///
/// let config = AutomatonConfig::new(12, 12)
///     .with_placement(Placement::Glider)
///     .with_max_frames(4);
/// let mut automaton = Automaton::initialize(&config, &mut LifeRng::new(1)).unwrap();
///
/// assert_eq!(automaton.advance(), StepOutcome::Advanced(2));
/// assert_eq!(automaton.all().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Automaton {
    history: History,
    placement: Placement,
    generation: u64,
    terminated: bool,
}

impl Automaton {
    /// Validate `config` and build a history holding only the seed frame.
    ///
    /// Randomized placements draw from `rng`.
    pub fn initialize(config: &AutomatonConfig, rng: &mut LifeRng) -> Result<Self, LifeError> {
        config.validate()?;

        let seed = config.placement.seed(config.width, config.height, rng);
        info!(
            width = config.width,
            height = config.height,
            placement = config.placement.name(),
            live = seed.live_count(),
            max_frames = config.max_frames,
            scroll = config.scroll_on_overflow,
            "automaton seeded"
        );

        Ok(Self {
            history: History::new(seed, config.max_frames, config.scroll_on_overflow),
            placement: config.placement,
            generation: 0,
            terminated: false,
        })
    }

    /// Discard all frames and reseed from `config`.
    ///
    /// On error the automaton is left exactly as it was.
    pub fn reset(&mut self, config: &AutomatonConfig, rng: &mut LifeRng) -> Result<(), LifeError> {
        *self = Self::initialize(config, rng)?;
        Ok(())
    }

    /// Compute and commit at most one new frame.
    pub fn advance(&mut self) -> StepOutcome {
        if self.terminated {
            return StepOutcome::Terminated;
        }

        if !self.history.scroll_on_overflow() && self.history.is_over_capacity() {
            debug!(
                retained = self.history.len(),
                max_frames = self.history.max_frames(),
                "history over capacity, step paused"
            );
            return StepOutcome::Paused(self.history.len());
        }

        let next = transition(self.history.current());
        if next.is_terminal() {
            self.terminated = true;
            info!(generation = self.generation, "automaton went extinct");
            return StepOutcome::Terminated;
        }

        self.generation += 1;
        let live = next.live_count();
        let evicted = self.history.push(next);
        debug!(generation = self.generation, live, evicted, "frame committed");

        StepOutcome::Advanced(self.history.len())
    }

    /// The most recent frame.
    #[must_use]
    pub fn current(&self) -> &GridSnapshot {
        self.history.current()
    }

    /// The retained window, oldest first.
    ///
    /// The returned vector shares structure with the history and is
    /// unaffected by later steps.
    #[must_use]
    pub fn all(&self) -> Vector<GridSnapshot> {
        self.history.frames().clone()
    }

    /// The history aggregate.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Steps committed since the seed.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once an `advance` has returned `Terminated`.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Placement the current run was seeded with.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Change the retention cap. With scrolling on, overflow is evicted
    /// immediately; otherwise stepping pauses until capacity returns.
    pub fn set_max_frames(&mut self, max_frames: usize) -> Result<(), LifeError> {
        if max_frames < 1 {
            return Err(LifeError::invalid("max_frames must be at least 1"));
        }
        let evicted = self.history.set_max_frames(max_frames);
        debug!(max_frames, evicted, "capacity changed");
        Ok(())
    }

    /// Change the overflow policy. Enabling scrolling evicts any overflow.
    pub fn set_scroll_on_overflow(&mut self, scroll: bool) {
        let evicted = self.history.set_scroll_on_overflow(scroll);
        debug!(scroll, evicted, "overflow policy changed");
    }
}
