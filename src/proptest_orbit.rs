//! Property-based tests for orbital state calculation and prediction.
//!
//! These verify geometric invariants across a wide range of orbital
//! parameters rather than hand-picked configurations.

use bevy::math::DVec3;
use proptest::prelude::*;
use std::f64::consts::TAU;

use crate::orbit;
use crate::prediction::predict;
use crate::test_utils::fixtures;
use crate::types::REPORT_THRESHOLD;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Position is periodic in t with period 2π/|ω|.
    #[test]
    fn prop_position_is_periodic(
        radius in 0.5f64..15.0,
        angle in 0.0f64..TAU,
        speed in 0.01f64..0.5,
        inclination in -1.5f64..1.5,
        t in 0.0f64..100.0,
    ) {
        let o = fixtures::inclined(radius, angle, speed, inclination);
        let period = orbit::orbital_period(speed).unwrap();

        let here = orbit::position(&o, t);
        let next_lap = orbit::position(&o, t + period);

        prop_assert!((here - next_lap).length() < 1e-6 * radius.max(1.0));
    }

    /// Velocity is the analytic derivative of position: central finite
    /// differences must agree within tolerance.
    #[test]
    fn prop_velocity_matches_finite_difference(
        radius in 0.5f64..15.0,
        angle in 0.0f64..TAU,
        speed in -0.5f64..0.5,
        inclination in -1.5f64..1.5,
        t in 0.0f64..100.0,
    ) {
        let o = fixtures::inclined(radius, angle, speed, inclination);
        let h = 1e-6;

        let numeric = (orbit::position(&o, t + h) - orbit::position(&o, t - h)) / (2.0 * h);
        let analytic = orbit::velocity(&o, t);

        let scale = (radius * speed.abs()).max(1.0);
        prop_assert!((numeric - analytic).length() < 1e-4 * scale);
    }

    /// Separation and relative speed are symmetric in their arguments.
    #[test]
    fn prop_separation_symmetric(
        ax in -20.0f64..20.0, ay in -20.0f64..20.0, az in -20.0f64..20.0,
        bx in -20.0f64..20.0, by in -20.0f64..20.0, bz in -20.0f64..20.0,
    ) {
        let a = DVec3::new(ax, ay, az);
        let b = DVec3::new(bx, by, bz);
        prop_assert_eq!(orbit::separation(a, b), orbit::separation(b, a));
        prop_assert_eq!(orbit::relative_speed(a, b), orbit::relative_speed(b, a));
    }

    /// Every reported prediction carries a risk score in
    /// (REPORT_THRESHOLD, 1] and a non-negative approach time.
    #[test]
    fn prop_predictions_are_well_formed(
        radius_a in 6.0f64..12.0,
        radius_b in 6.0f64..12.0,
        angle_a in 0.0f64..TAU,
        angle_b in 0.0f64..TAU,
        speed_a in -0.3f64..0.3,
        speed_b in -0.3f64..0.3,
        inclination_b in -0.8f64..0.8,
    ) {
        let satellites = vec![
            fixtures::satellite(1, fixtures::coplanar(radius_a, angle_a, speed_a)),
            fixtures::satellite(2, fixtures::inclined(radius_b, angle_b, speed_b, inclination_b)),
        ];

        for p in predict(&satellites, 0.0) {
            prop_assert!(p.probability > REPORT_THRESHOLD);
            prop_assert!(p.probability <= 1.0);
            prop_assert!(p.time_to_collision >= 0.0);
            prop_assert!(p.collision_point.is_finite());
        }
    }
}
