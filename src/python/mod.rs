//! Python bindings for the rust-life engine.
//!
//! Lets an external renderer written in Python pull frames as numpy arrays.
//!
//! # Quick Start
//!
//! ```python
//! import rust_life
//!
//! life = rust_life.Automaton(width=40, height=40, placement="random", seed=7)
//!
//! while life.advance() != "terminated":
//!     trail = life.frames()   # oldest first, each (height, width) bool
//!     draw(trail)
//!     time.sleep(0.05)
//! ```

use pyo3::prelude::*;

mod py_automaton;

pub use py_automaton::*;

/// rust-life: Conway's Game of Life with a bounded frame history.
#[pymodule]
fn rust_life(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAutomaton>()?;
    Ok(())
}
