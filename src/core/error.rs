//! Error type shared by the engine.

use thiserror::Error;

/// Errors reported by construction and configuration.
///
/// Stepping never fails: extinction and backpressure are
/// [`StepOutcome`](crate::automaton::StepOutcome)s, not errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LifeError {
    /// Dimensions, frame cap, or placement parameters are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A cell coordinate outside the grid.
    #[error("cell ({x}, {y}) out of range for {width}x{height} grid")]
    IndexOutOfRange {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// A configuration document could not be decoded.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(String),
}

impl LifeError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        LifeError::InvalidConfiguration(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LifeError::invalid("width must be at least 3, got 2");
        assert_eq!(err.to_string(), "invalid configuration: width must be at least 3, got 2");

        let err = LifeError::IndexOutOfRange { x: 5, y: 1, width: 4, height: 4 };
        assert_eq!(err.to_string(), "cell (5, 1) out of range for 4x4 grid");
    }
}
