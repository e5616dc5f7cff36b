//! Placement strategies and seed-frame construction.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{LifeError, LifeRng};
use crate::grid::{perlin2, GridSnapshot};

/// Range the per-run noise offset is drawn from.
pub const NOISE_OFFSET_RANGE: std::ops::Range<i32> = -1000..1000;

/// Glider cells relative to `(0, height - 5)`.
const GLIDER: [(usize, usize); 5] = [(1, 1), (2, 1), (3, 1), (3, 2), (2, 3)];

/// Lightweight spaceship cells relative to `(0, height / 2)`.
const LIGHTWEIGHT_SPACESHIP: [(usize, usize); 9] = [
    (1, 1),
    (4, 1),
    (5, 2),
    (5, 3),
    (5, 4),
    (1, 3),
    (2, 4),
    (3, 4),
    (4, 4),
];

/// How the seed frame is populated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Placement {
    /// Alive where Perlin noise at `(x * frequency + offset, y * frequency)`
    /// exceeds `minimum`. The offset is drawn once per seed.
    Noise { frequency: f32, minimum: f32 },
    /// Alive where an independent uniform draw exceeds `threshold`.
    Random { threshold: f32 },
    /// A single glider near the bottom-left corner.
    Glider,
    /// A single lightweight spaceship on the left edge, halfway down.
    #[serde(alias = "lwss")]
    LightweightSpaceship,
}

impl Default for Placement {
    fn default() -> Self {
        Placement::Noise {
            frequency: 0.5,
            minimum: 0.5,
        }
    }
}

impl Placement {
    /// `Random` with an even chance per cell.
    pub const RANDOM: Placement = Placement::Random { threshold: 0.5 };

    /// Reject parameters that cannot produce a meaningful seed.
    pub fn validate(&self) -> Result<(), LifeError> {
        match *self {
            Placement::Noise { frequency, minimum } => {
                if !frequency.is_finite() {
                    return Err(LifeError::invalid(format!(
                        "noise frequency must be finite, got {frequency}"
                    )));
                }
                check_unit("noise minimum", minimum)
            }
            Placement::Random { threshold } => check_unit("random threshold", threshold),
            Placement::Glider | Placement::LightweightSpaceship => Ok(()),
        }
    }

    /// Short name used in logs and the CLI.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Placement::Noise { .. } => "noise",
            Placement::Random { .. } => "random",
            Placement::Glider => "glider",
            Placement::LightweightSpaceship => "lwss",
        }
    }

    /// Build the seed frame for a `width x height` grid.
    ///
    /// Pattern cells that fall outside the grid are dropped.
    pub fn seed(&self, width: usize, height: usize, rng: &mut LifeRng) -> GridSnapshot {
        match *self {
            Placement::Noise { frequency, minimum } => {
                let offset = rng.gen_range(NOISE_OFFSET_RANGE) as f32;
                debug!(offset, frequency, minimum, "seeding from noise");
                GridSnapshot::from_fn(width, height, |x, y| {
                    perlin2(x as f32 * frequency + offset, y as f32 * frequency) > minimum
                })
            }
            Placement::Random { threshold } => {
                GridSnapshot::from_fn(width, height, |_, _| rng.gen_unit() > threshold)
            }
            Placement::Glider => stamp(width, height, &GLIDER, height as isize - 5),
            Placement::LightweightSpaceship => {
                stamp(width, height, &LIGHTWEIGHT_SPACESHIP, (height / 2) as isize)
            }
        }
    }
}

fn check_unit(what: &str, value: f32) -> Result<(), LifeError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(LifeError::invalid(format!("{what} must be within [0, 1], got {value}")))
    }
}

/// Place `pattern` with its origin at `(0, top)`; `top` may be negative on
/// short grids, in which case the rows above the grid are clipped.
fn stamp(width: usize, height: usize, pattern: &[(usize, usize)], top: isize) -> GridSnapshot {
    GridSnapshot::from_fn(width, height, |x, y| {
        pattern
            .iter()
            .any(|&(px, py)| px == x && py as isize + top == y as isize)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider_cells() {
        let mut rng = LifeRng::new(0);
        let grid = Placement::Glider.seed(10, 10, &mut rng);

        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![(1, 6), (2, 6), (3, 6), (3, 7), (2, 8)]);
    }

    #[test]
    fn test_lwss_cells() {
        let mut rng = LifeRng::new(0);
        let grid = Placement::LightweightSpaceship.seed(12, 12, &mut rng);

        let mut live: Vec<_> = grid.live_cells().collect();
        live.sort();
        let mut expected = vec![
            (1, 7), (4, 7), (5, 8), (5, 9), (5, 10), (1, 9), (2, 10), (3, 10), (4, 10),
        ];
        expected.sort();
        assert_eq!(live, expected);
    }

    #[test]
    fn test_patterns_do_not_touch_rng() {
        let mut rng = LifeRng::new(5);
        let mut untouched = rng.clone();
        let _ = Placement::Glider.seed(8, 8, &mut rng);
        let _ = Placement::LightweightSpaceship.seed(8, 8, &mut rng);
        assert_eq!(rng.gen_range(0..1_000_000), untouched.gen_range(0..1_000_000));
    }

    #[test]
    fn test_pattern_clipped_on_small_grid() {
        let mut rng = LifeRng::new(0);
        let grid = Placement::LightweightSpaceship.seed(4, 6, &mut rng);
        assert!(grid.live_cells().all(|(x, y)| x < 4 && y < 6));
        assert!(grid.cell(1, 4));
    }

    #[test]
    fn test_glider_on_short_grid() {
        let mut rng = LifeRng::new(0);
        let grid = Placement::Glider.seed(5, 3, &mut rng);
        assert_eq!(grid.height(), 3);
        assert!(grid.live_count() > 0);
    }

    #[test]
    fn test_random_is_seed_deterministic() {
        let a = Placement::RANDOM.seed(20, 20, &mut LifeRng::new(11));
        let b = Placement::RANDOM.seed(20, 20, &mut LifeRng::new(11));
        let c = Placement::RANDOM.seed(20, 20, &mut LifeRng::new(12));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_random_density_near_half() {
        let grid = Placement::RANDOM.seed(100, 100, &mut LifeRng::new(3));
        let live = grid.live_count();
        assert!((4000..6000).contains(&live), "live = {live}");
    }

    #[test]
    fn test_random_threshold_extremes() {
        let mut rng = LifeRng::new(1);
        assert!(Placement::Random { threshold: 1.0 }.seed(10, 10, &mut rng).is_terminal());
    }

    #[test]
    fn test_noise_is_seed_deterministic() {
        let placement = Placement::default();
        let a = placement.seed(25, 25, &mut LifeRng::new(42));
        let b = placement.seed(25, 25, &mut LifeRng::new(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_noise_minimum_one_is_empty() {
        let placement = Placement::Noise { frequency: 0.3, minimum: 1.0 };
        assert!(placement.seed(25, 25, &mut LifeRng::new(9)).is_terminal());
    }

    #[test]
    fn test_validate() {
        assert!(Placement::default().validate().is_ok());
        assert!(Placement::Noise { frequency: f32::NAN, minimum: 0.5 }.validate().is_err());
        assert!(Placement::Noise { frequency: 0.5, minimum: -0.1 }.validate().is_err());
        assert!(Placement::Random { threshold: 2.0 }.validate().is_err());
        assert!(Placement::Glider.validate().is_ok());
    }

    #[test]
    fn test_serde_tags() {
        let json = serde_json::to_string(&Placement::Glider).unwrap();
        assert_eq!(json, r#"{"mode":"glider"}"#);

        let parsed: Placement = serde_json::from_str(r#"{"mode":"lwss"}"#).unwrap();
        assert_eq!(parsed, Placement::LightweightSpaceship);
    }
}
