//! Thread-safe handle for a stepper and concurrent readers.
//!
//! A stepper thread calls `advance` while a renderer thread pulls frames.
//! `advance` holds the write lock across the whole evict-and-append; readers
//! hold the read lock only long enough to clone the `im::Vector`, so a
//! reader sees either the window before a step or the window after it.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use im::Vector;

use super::controller::{Automaton, StepOutcome};
use crate::core::{AutomatonConfig, LifeError, LifeRng};
use crate::grid::GridSnapshot;

/// Shared, cloneable handle to an [`Automaton`].
#[derive(Clone, Debug)]
pub struct SharedAutomaton {
    inner: Arc<RwLock<Automaton>>,
}

impl SharedAutomaton {
    /// Wrap an automaton for sharing.
    pub fn new(automaton: Automaton) -> Self {
        Self {
            inner: Arc::new(RwLock::new(automaton)),
        }
    }

    // Poisoned guards are recovered: no panic path leaves the automaton
    // half updated.
    fn read(&self) -> RwLockReadGuard<'_, Automaton> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Automaton> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Step once.
    pub fn advance(&self) -> StepOutcome {
        self.write().advance()
    }

    /// Reseed from `config`.
    pub fn reset(&self, config: &AutomatonConfig, rng: &mut LifeRng) -> Result<(), LifeError> {
        self.write().reset(config, rng)
    }

    /// Consistent copy of the retained window.
    #[must_use]
    pub fn frames(&self) -> Vector<GridSnapshot> {
        self.read().all()
    }

    /// The most recent frame.
    #[must_use]
    pub fn current(&self) -> GridSnapshot {
        self.read().current().clone()
    }

    /// Change the retention cap.
    pub fn set_max_frames(&self, max_frames: usize) -> Result<(), LifeError> {
        self.write().set_max_frames(max_frames)
    }

    /// Change the overflow policy.
    pub fn set_scroll_on_overflow(&self, scroll: bool) {
        self.write().set_scroll_on_overflow(scroll);
    }

    /// Run `f` with shared access to the automaton.
    pub fn with<R>(&self, f: impl FnOnce(&Automaton) -> R) -> R {
        f(&self.read())
    }
}
