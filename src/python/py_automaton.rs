//! Automaton bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::automaton::StepOutcome;
use crate::core::{AutomatonConfig, LifeError};
use crate::driver::{Driver, DriverConfig};
use crate::grid::GridSnapshot;
use crate::placement::Placement;

fn to_py_err(err: LifeError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

fn to_numpy<'py>(py: Python<'py>, frame: &GridSnapshot) -> PyResult<Bound<'py, PyArray2<bool>>> {
    PyArray1::from_slice_bound(py, frame.as_slice()).reshape([frame.height(), frame.width()])
}

fn parse_placement(name: &str, frequency: f32, minimum: f32, threshold: f32) -> PyResult<Placement> {
    match name {
        "noise" => Ok(Placement::Noise { frequency, minimum }),
        "random" => Ok(Placement::Random { threshold }),
        "glider" => Ok(Placement::Glider),
        "lwss" | "lightweight_spaceship" => Ok(Placement::LightweightSpaceship),
        other => Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(format!(
            "unknown placement {:?}",
            other
        ))),
    }
}

/// Python wrapper for a driven automaton.
///
/// Python owns the loop and the delay; each `advance()` is one step.
#[pyclass(name = "Automaton")]
pub struct PyAutomaton {
    driver: Driver,
}

#[pymethods]
impl PyAutomaton {
    /// Create and seed an automaton.
    ///
    /// # Arguments
    /// - width, height: Grid size including the dead border (at least 3)
    /// - placement: "noise", "random", "glider" or "lwss"
    /// - seed: RNG seed; restarts fork from it
    /// - max_frames: Retained history size
    /// - scroll: Evict oldest frames when full (otherwise pause)
    /// - frequency, minimum: Noise parameters
    /// - threshold: Random placement threshold
    #[new]
    #[pyo3(signature = (
        width = 25,
        height = 25,
        placement = "noise",
        seed = 42,
        max_frames = 25,
        scroll = true,
        frequency = 0.5,
        minimum = 0.5,
        threshold = 0.5
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        width: usize,
        height: usize,
        placement: &str,
        seed: u64,
        max_frames: usize,
        scroll: bool,
        frequency: f32,
        minimum: f32,
        threshold: f32,
    ) -> PyResult<Self> {
        let config = AutomatonConfig::new(width, height)
            .with_placement(parse_placement(placement, frequency, minimum, threshold)?)
            .with_max_frames(max_frames)
            .with_scroll_on_overflow(scroll)
            .with_seed(seed);
        let driver = Driver::new(DriverConfig::new(config)).map_err(to_py_err)?;
        Ok(Self { driver })
    }

    /// Step once. Returns "advanced", "paused" or "terminated".
    fn advance(&mut self) -> &'static str {
        match self.driver.step() {
            StepOutcome::Advanced(_) => "advanced",
            StepOutcome::Paused(_) => "paused",
            StepOutcome::Terminated => "terminated",
        }
    }

    /// Discard the history and reseed.
    ///
    /// Without `seed` the next fork of the session RNG is used; with one the
    /// session starts over from that seed.
    #[pyo3(signature = (seed = None))]
    fn reset(&mut self, seed: Option<u64>) -> PyResult<()> {
        match seed {
            Some(seed) => {
                let mut config = self.driver.config().clone();
                config.automaton.seed = seed;
                self.driver = Driver::new(config).map_err(to_py_err)?;
                Ok(())
            }
            None => self.driver.restart().map_err(to_py_err),
        }
    }

    /// The current frame as a (height, width) bool array.
    fn current<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<bool>>> {
        to_numpy(py, self.driver.automaton().current())
    }

    /// All retained frames, oldest first.
    fn frames<'py>(&self, py: Python<'py>) -> PyResult<Vec<Bound<'py, PyArray2<bool>>>> {
        self.driver
            .automaton()
            .all()
            .iter()
            .map(|frame| to_numpy(py, frame))
            .collect()
    }

    /// Change the retained history size.
    fn set_max_frames(&mut self, max_frames: usize) -> PyResult<()> {
        self.driver
            .automaton_mut()
            .set_max_frames(max_frames)
            .map_err(to_py_err)
    }

    /// Change the overflow policy.
    fn set_scroll(&mut self, scroll: bool) {
        self.driver.automaton_mut().set_scroll_on_overflow(scroll);
    }

    /// Steps committed since the last seed.
    #[getter]
    fn generation(&self) -> u64 {
        self.driver.automaton().generation()
    }

    /// True once the automaton has gone extinct.
    #[getter]
    fn is_terminated(&self) -> bool {
        self.driver.automaton().is_terminated()
    }

    #[getter]
    fn width(&self) -> usize {
        self.driver.automaton().current().width()
    }

    #[getter]
    fn height(&self) -> usize {
        self.driver.automaton().current().height()
    }

    fn __len__(&self) -> usize {
        self.driver.automaton().history().len()
    }

    fn __repr__(&self) -> String {
        let automaton = self.driver.automaton();
        format!(
            "Automaton({}x{}, placement={}, frames={}, generation={})",
            automaton.current().width(),
            automaton.current().height(),
            automaton.placement().name(),
            automaton.history().len(),
            automaton.generation()
        )
    }
}
