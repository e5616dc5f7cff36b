//! Step loop with pacing, cancellation, and restart.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::automaton::{Automaton, StepOutcome};
use crate::core::{AutomatonConfig, LifeError, LifeRng};

/// Configuration for a driver.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// The automaton to run, including the step delay.
    pub automaton: AutomatonConfig,

    /// Stop after this many `advance` calls (`None` = until terminated or
    /// cancelled).
    pub max_steps: Option<u64>,

    /// Reseed with fresh randomness instead of stopping on extinction.
    pub restart_on_termination: bool,
}

impl DriverConfig {
    /// Create a driver config around an automaton config.
    pub fn new(automaton: AutomatonConfig) -> Self {
        Self {
            automaton,
            ..Self::default()
        }
    }

    /// Set the step limit.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Restart on extinction instead of stopping.
    #[must_use]
    pub fn with_restart_on_termination(mut self, restart: bool) -> Self {
        self.restart_on_termination = restart;
        self
    }
}

/// Why `run` returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// The automaton went extinct and restarts are off.
    Terminated,
    /// `max_steps` was reached.
    StepLimit,
    /// The cancellation flag was set.
    Cancelled,
}

/// Counters for one `run`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// `advance` calls made.
    pub steps: u64,
    /// Calls that committed a frame.
    pub advanced: u64,
    /// Calls that were paused by backpressure.
    pub paused: u64,
    /// Runs of consecutive paused calls.
    pub pause_episodes: u64,
    /// Reseeds after extinction.
    pub restarts: u32,
    /// Why the loop ended.
    pub stop: StopReason,
}

/// Owns an automaton and drives it.
///
/// Every run (the first one and each restart) is seeded from a fresh fork
/// of the driver's RNG, so successive runs differ while the whole session
/// stays reproducible from one seed.
pub struct Driver {
    config: DriverConfig,
    rng: LifeRng,
    automaton: Automaton,
    restarts: u32,
}

impl Driver {
    /// Validate the config and seed the first run.
    pub fn new(config: DriverConfig) -> Result<Self, LifeError> {
        let mut rng = LifeRng::new(config.automaton.seed);
        let automaton = Automaton::initialize(&config.automaton, &mut rng.fork())?;
        Ok(Self {
            config,
            rng,
            automaton,
            restarts: 0,
        })
    }

    /// The driven automaton.
    #[must_use]
    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Mutable access for capacity and policy changes between steps.
    pub fn automaton_mut(&mut self) -> &mut Automaton {
        &mut self.automaton
    }

    /// The driver configuration.
    #[must_use]
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Restarts performed so far.
    #[must_use]
    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    /// Advance once.
    pub fn step(&mut self) -> StepOutcome {
        let outcome = self.automaton.advance();
        debug!(?outcome, generation = self.automaton.generation(), "step");
        outcome
    }

    /// Discard the current run and reseed with fresh randomness.
    pub fn restart(&mut self) -> Result<(), LifeError> {
        let mut run_rng = self.rng.fork();
        self.automaton.reset(&self.config.automaton, &mut run_rng)?;
        self.restarts += 1;
        info!(restarts = self.restarts, "automaton restarted");
        Ok(())
    }

    /// Step until extinction, the step limit, or cancellation.
    ///
    /// `cancel` is checked before every step. `on_step` sees the automaton
    /// right after each `advance` (before any restart). The configured delay
    /// is slept after every step that does not end the run, including paused
    /// ones.
    pub fn run(
        &mut self,
        cancel: &AtomicBool,
        mut on_step: impl FnMut(&Automaton, StepOutcome),
    ) -> Result<RunSummary, LifeError> {
        let delay = self.config.automaton.delay();
        let restarts_before = self.restarts;
        let mut steps = 0u64;
        let mut advanced = 0u64;
        let mut paused = 0u64;
        let mut pause_episodes = 0u64;
        let mut in_pause = false;

        let stop = loop {
            if cancel.load(Ordering::Relaxed) {
                break StopReason::Cancelled;
            }
            if self.config.max_steps.is_some_and(|max| steps >= max) {
                break StopReason::StepLimit;
            }

            let outcome = self.step();
            steps += 1;
            on_step(&self.automaton, outcome);

            match outcome {
                StepOutcome::Advanced(_) => {
                    advanced += 1;
                    in_pause = false;
                }
                StepOutcome::Paused(retained) => {
                    paused += 1;
                    if !in_pause {
                        in_pause = true;
                        pause_episodes += 1;
                        info!(
                            retained,
                            max_frames = self.automaton.history().max_frames(),
                            "history full and scrolling is off; stepping paused"
                        );
                    }
                }
                StepOutcome::Terminated if self.config.restart_on_termination => self.restart()?,
                StepOutcome::Terminated => break StopReason::Terminated,
            }

            if !delay.is_zero() {
                thread::sleep(delay);
            } else if in_pause {
                thread::yield_now();
            }
        };

        let summary = RunSummary {
            steps,
            advanced,
            paused,
            pause_episodes,
            restarts: self.restarts - restarts_before,
            stop,
        };
        info!(?summary, "run finished");
        Ok(summary)
    }
}
