//! Placement integration tests.

use rust_life::core::{AutomatonConfig, LifeError, LifeRng};
use rust_life::placement::Placement;
use rust_life::Automaton;

// =============================================================================
// Pattern Placement
// =============================================================================

#[test]
fn test_glider_near_bottom_left() {
    let grid = Placement::Glider.seed(25, 25, &mut LifeRng::new(0));
    let live: Vec<_> = grid.live_cells().collect();
    assert_eq!(live, vec![(1, 21), (2, 21), (3, 21), (3, 22), (2, 23)]);
}

#[test]
fn test_lwss_halfway_down() {
    let grid = Placement::LightweightSpaceship.seed(25, 25, &mut LifeRng::new(0));
    assert_eq!(grid.live_count(), 9);
    // Bounding box rows are height / 2 + 1 ..= height / 2 + 4.
    assert!(grid.live_cells().all(|(x, y)| (1..=5).contains(&x) && (13..=16).contains(&y)));
}

#[test]
fn test_patterns_ignore_seed() {
    for placement in [Placement::Glider, Placement::LightweightSpaceship] {
        let a = placement.seed(20, 20, &mut LifeRng::new(1));
        let b = placement.seed(20, 20, &mut LifeRng::new(2));
        assert_eq!(a, b, "{} depends on the rng", placement.name());
    }
}

// =============================================================================
// Randomized Placement
// =============================================================================

#[test]
fn test_noise_differs_between_seeds() {
    let placement = Placement::default();
    let a = placement.seed(40, 40, &mut LifeRng::new(1));
    let b = placement.seed(40, 40, &mut LifeRng::new(2));
    assert_ne!(a, b);
}

#[test]
fn test_noise_low_minimum_fills_grid() {
    let placement = Placement::Noise {
        frequency: 0.37,
        minimum: 0.0,
    };
    let grid = placement.seed(30, 30, &mut LifeRng::new(9));
    assert!(grid.live_count() > 30 * 30 / 2);
}

#[test]
fn test_noise_huge_frequency_seeds() {
    for frequency in [1.0e10, -1.0e10, 3.0e38] {
        let config = AutomatonConfig::new(5, 5).with_placement(Placement::Noise {
            frequency,
            minimum: 0.5,
        });
        assert!(config.validate().is_ok());

        let mut automaton = Automaton::initialize(&config, &mut LifeRng::new(0)).unwrap();
        assert_eq!(automaton.current().width(), 5);
        automaton.advance();
    }
}

#[test]
fn test_random_zero_threshold_fills_grid() {
    let grid = Placement::Random { threshold: 0.0 }.seed(10, 10, &mut LifeRng::new(3));
    // A draw of exactly 0.0 is possible but vanishingly rare.
    assert!(grid.live_count() >= 99);
}

#[test]
fn test_random_seed_includes_border() {
    // Seeding fills every cell; only transitions clear the border.
    let grid = Placement::Random { threshold: 0.0 }.seed(6, 6, &mut LifeRng::new(3));
    let border_alive = grid
        .live_cells()
        .filter(|&(x, y)| x == 0 || y == 0 || x == 5 || y == 5)
        .count();
    assert!(border_alive > 0);
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_invalid_placement_rejected_by_initialize() {
    let bad = [
        Placement::Noise {
            frequency: f32::NAN,
            minimum: 0.5,
        },
        Placement::Noise {
            frequency: 0.5,
            minimum: 1.5,
        },
        Placement::Random { threshold: -0.1 },
    ];
    for placement in bad {
        let config = AutomatonConfig::new(10, 10).with_placement(placement);
        let result = Automaton::initialize(&config, &mut LifeRng::new(0));
        assert!(matches!(result, Err(LifeError::InvalidConfiguration(_))));
    }
}

#[test]
fn test_config_json_placements() {
    let json = r#"{ "width": 12, "height": 12, "placement": { "mode": "lwss" } }"#;
    let config = AutomatonConfig::from_json(json).unwrap();
    assert_eq!(config.placement, Placement::LightweightSpaceship);

    let json = r#"{ "placement": { "mode": "random", "threshold": 0.8 } }"#;
    let config = AutomatonConfig::from_json(json).unwrap();
    assert_eq!(config.placement, Placement::Random { threshold: 0.8 });
    assert_eq!(config.width, 25);

    let err = AutomatonConfig::from_json(r#"{ "placement": { "mode": "spiral" } }"#).unwrap_err();
    assert!(matches!(err, LifeError::ConfigLoad(_)));
}
