//! Tests for recovery configuration, planning context and the two-pass run

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use pixel_recovery::RecoveryError;
    use pixel_recovery::io::configuration::{
        DEFAULT_DISTANCE_THRESHOLD, DEFAULT_MAX_DEPTH, MAX_SEARCH_DEPTH,
    };
    use pixel_recovery::recovery::{
        IntensityCeiling, PlanStrategy, RecoveryConfig, RecoveryContext, recover,
    };
    use pixel_recovery::spatial::{Coordinate, IntensityView};

    const HEALTHY: u8 = 50;
    const HOT: u8 = 200;

    /// 5x5 healthy border around a 3x3 unhealthy block
    fn hot_block() -> Array2<u8> {
        let mut grid = Array2::from_elem((5, 5), HEALTHY);
        for row in 1..4 {
            for col in 1..4 {
                if let Some(cell) = grid.get_mut([row, col]) {
                    *cell = HOT;
                }
            }
        }
        grid
    }

    // Tests defaults come from the configuration constants
    // Verified by disabling the second pass by default
    #[test]
    fn test_default_config() {
        let config = RecoveryConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!((config.distance_threshold - DEFAULT_DISTANCE_THRESHOLD).abs() < f64::EPSILON);
        assert!(config.second_pass);
        assert!(config.validate().is_ok());
    }

    // Tests invalid parameters are rejected
    // Verified by skipping each individual check
    #[test]
    fn test_config_validation() {
        let invalid = [
            RecoveryConfig {
                max_depth: 0,
                ..RecoveryConfig::default()
            },
            RecoveryConfig {
                max_depth: MAX_SEARCH_DEPTH + 1,
                ..RecoveryConfig::default()
            },
            RecoveryConfig {
                distance_threshold: -1.0,
                ..RecoveryConfig::default()
            },
            RecoveryConfig {
                distance_threshold: f64::NAN,
                ..RecoveryConfig::default()
            },
        ];

        for config in invalid {
            assert!(
                matches!(
                    config.validate(),
                    Err(RecoveryError::InvalidParameter { .. })
                ),
                "{config:?} should be rejected"
            );
        }
    }

    // Tests the context refuses empty images
    // Verified by removing the emptiness check
    #[test]
    fn test_context_rejects_empty_image() {
        let grid = Array2::<u8>::zeros((3, 0));
        let predicate = IntensityCeiling::default();
        let config = RecoveryConfig::default();
        assert!(matches!(
            RecoveryContext::new(&grid, &predicate, &config),
            Err(RecoveryError::EmptyImage { .. })
        ));
    }

    // Tests only unhealthy pixels are planned, in row-major order
    // Verified by planning every pixel
    #[test]
    fn test_plan_unhealthy_skips_healthy_pixels() {
        let mut grid = Array2::from_elem((4, 4), HEALTHY);
        for (row, col) in [(2, 1), (0, 3)] {
            if let Some(cell) = grid.get_mut([row, col]) {
                *cell = HOT;
            }
        }
        let predicate = IntensityCeiling::default();
        let config = RecoveryConfig::default();
        let context = RecoveryContext::new(&grid, &predicate, &config).expect("valid context");

        let targets: Vec<Coordinate> = context
            .plan_unhealthy()
            .expect("planning succeeds")
            .iter()
            .map(|plan| plan.target)
            .collect();
        assert_eq!(targets, vec![Coordinate::new(0, 3), Coordinate::new(2, 1)]);
        assert!(!context.is_unhealthy(Coordinate::new(0, 0)));
        assert!(!context.is_unhealthy(Coordinate::new(-1, 0)));
    }

    // Tests explicit targets are filtered by health and bounds-checked
    // Verified by planning healthy targets
    #[test]
    fn test_plan_targets() {
        let grid = hot_block();
        let predicate = IntensityCeiling::default();
        let config = RecoveryConfig::default();
        let context = RecoveryContext::new(&grid, &predicate, &config).expect("valid context");

        let plans = context
            .plan_targets([Coordinate::new(0, 0), Coordinate::new(2, 2)])
            .expect("targets in range");
        assert_eq!(plans.len(), 1);
        assert_eq!(plans.first().map(|p| p.target), Some(Coordinate::new(2, 2)));

        assert!(matches!(
            context.plan_targets([Coordinate::new(9, 9)]),
            Err(RecoveryError::CoordinateOutOfRange { .. })
        ));
    }

    // Tests recovery leaves a fully healthy image untouched
    // Verified by writing every reconstruction unconditionally
    #[test]
    fn test_healthy_image_is_unchanged() {
        let mut grid = Array2::from_shape_fn((6, 5), |(r, c)| ((r * 17 + c * 5) % 150) as u8);
        let original = grid.clone();

        let report = recover(&mut grid, &IntensityCeiling::default(), &RecoveryConfig::default())
            .expect("recovery succeeds");

        assert_eq!(grid, original);
        assert_eq!(report.scanned, 30);
        assert_eq!(report.unhealthy, 0);
        assert_eq!(report.changed, 0);
        assert!(report.recovered.is_empty());
        assert!(report.unrecovered.is_empty());
    }

    // Tests the second pass recovers pixels enclosed by unhealthy neighbours
    // Verified by planning the second pass against the original image
    #[test]
    fn test_second_pass_uses_repaired_image() {
        let mut grid = hot_block();
        let config = RecoveryConfig {
            max_depth: 1,
            ..RecoveryConfig::default()
        };

        let report = recover(&mut grid, &IntensityCeiling::default(), &config)
            .expect("recovery succeeds");

        assert_eq!(report.unhealthy, 9);
        assert_eq!(report.fallback_plans, 9);
        assert_eq!(report.second_pass_replans, 1);
        assert_eq!(report.changed, 9);
        assert_eq!(report.recovered.count(), 9);
        assert!(report.unrecovered.is_empty());

        // Edge-adjacent ring pixels copy one neighbour, corners sum two
        assert_eq!(grid.intensity(1, 2), Some(50));
        assert_eq!(grid.intensity(1, 1), Some(100));
        assert_eq!(grid.intensity(2, 2), Some(50));
    }

    // Tests a single pass leaves enclosed pixels unrecovered
    // Verified by running the second pass regardless of configuration
    #[test]
    fn test_single_pass_reports_unrecovered() {
        let mut grid = hot_block();
        let config = RecoveryConfig {
            max_depth: 1,
            second_pass: false,
            ..RecoveryConfig::default()
        };

        let report = recover(&mut grid, &IntensityCeiling::default(), &config)
            .expect("recovery succeeds");

        assert_eq!(report.second_pass_replans, 0);
        assert_eq!(report.changed, 8);
        assert_eq!(report.unrecovered.count(), 1);
        assert!(report.unrecovered.contains(Coordinate::new(2, 2)));
        assert_eq!(grid.intensity(2, 2), Some(HOT));
    }

    // Tests strategy tallies match the planner's choices
    // Verified by counting every plan as cardinal
    #[test]
    fn test_strategy_tally() {
        let mut grid = Array2::from_elem((5, 5), HEALTHY);
        if let Some(cell) = grid.get_mut([2, 2]) {
            *cell = HOT;
        }
        let report = recover(&mut grid, &IntensityCeiling::default(), &RecoveryConfig::default())
            .expect("recovery succeeds");

        assert_eq!(report.cardinal_plans, 1);
        assert_eq!(report.diagonal_plans, 0);
        assert_eq!(report.fallback_plans, 0);
        assert_eq!(report.second_pass_replans, 0);

        let predicate = IntensityCeiling::default();
        let config = RecoveryConfig::default();
        let context = RecoveryContext::new(&grid, &predicate, &config).expect("valid context");
        let plan = context.plan(Coordinate::new(2, 2)).expect("in range");
        assert_eq!(plan.strategy, PlanStrategy::Cardinal);
    }

    // Tests invalid configuration fails before touching the image
    // Verified by validating after the first pass
    #[test]
    fn test_recover_rejects_invalid_config() {
        let mut grid = hot_block();
        let original = grid.clone();
        let config = RecoveryConfig {
            max_depth: 0,
            ..RecoveryConfig::default()
        };

        assert!(recover(&mut grid, &IntensityCeiling::default(), &config).is_err());
        assert_eq!(grid, original);
    }
}
