//! Property tests for the bisection solver.

use fincalc_math::solvers::{bisection, SolverConfig};
use fincalc_math::MathError;
use proptest::prelude::*;

proptest! {
    /// Any sign-changing bracket terminates within the iteration budget,
    /// either converged or with an exhaustion error.
    #[test]
    fn prop_terminates_within_budget(
        root in -0.9f64..5.0,
        slope in prop_oneof![-1e4f64..-1e-2, 1e-2f64..1e4],
    ) {
        let f = |x: f64| slope * (x - root);
        let config = SolverConfig::new(1e-6, 100);

        match bisection(f, -0.99, 10.0, &config) {
            Ok(result) => {
                prop_assert!(result.iterations <= 100);
                prop_assert!(f(result.root).abs() < 1e-6);
            }
            Err(MathError::ConvergenceFailed { iterations, .. }) => {
                prop_assert_eq!(iterations, 100);
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// Increasing and decreasing residuals find the same root.
    #[test]
    fn prop_direction_independent(root in -0.5f64..2.0) {
        let rising = |x: f64| (x - root) * 100.0;
        let falling = |x: f64| (root - x) * 100.0;
        let config = SolverConfig::new(1e-6, 100);

        let up = bisection(rising, -0.5 - 1e-3, 2.0 + 1e-3, &config).unwrap();
        let down = bisection(falling, -0.5 - 1e-3, 2.0 + 1e-3, &config).unwrap();

        prop_assert!((up.root - root).abs() < 1e-7);
        prop_assert!((down.root - root).abs() < 1e-7);
    }
}
