//! Test utilities for the close-approach engine.
//!
//! Provides fixtures for building satellites in known geometric
//! configurations: pairs that never meet, pairs guaranteed to conjunct,
//! and crowded shells that produce many qualifying predictions.

use std::f64::consts::PI;

use crate::satellite::{OrbitalParams, Satellite, SatelliteId, PALETTE};

/// Fixtures for creating test orbital configurations.
pub mod fixtures {
    use super::*;

    /// An equatorial circular orbit.
    pub fn coplanar(radius: f64, angle: f64, speed: f64) -> OrbitalParams {
        inclined(radius, angle, speed, 0.0)
    }

    /// A circular orbit tilted by `inclination`.
    pub fn inclined(radius: f64, angle: f64, speed: f64, inclination: f64) -> OrbitalParams {
        OrbitalParams {
            radius,
            speed,
            angle,
            inclination,
            mass: 1000.0,
            size: 0.2,
        }
    }

    /// A satellite with the given id and orbit, cached state computed at
    /// local time 0.
    pub fn satellite(id: u64, orbit: OrbitalParams) -> Satellite {
        Satellite::from_spec(
            SatelliteId(id),
            crate::satellite::SatelliteSpec {
                name: crate::satellite::name_for_index(id),
                color: PALETTE[(id as usize) % PALETTE.len()],
                orbit,
            },
        )
    }

    /// Two satellites diametrically opposed on the same ring at the same
    /// rate. Their separation is a constant 2R; they never approach.
    pub fn opposed_pair() -> Vec<Satellite> {
        vec![
            satellite(1, coplanar(8.0, 0.0, 0.1)),
            satellite(2, coplanar(8.0, PI, 0.1)),
        ]
    }

    /// Two satellites on the same ring where the second slowly catches
    /// the first: phases converge and the pair conjuncts within the
    /// prediction horizon.
    pub fn catch_up_pair() -> Vec<Satellite> {
        vec![
            satellite(1, coplanar(8.0, 0.0, 0.1)),
            satellite(2, coplanar(8.0, PI + 0.001, 0.15)),
        ]
    }

    /// `n` satellites bunched on one ring with rates arranged so the
    /// whole bunch converges a few time-units in — every pair produces a
    /// qualifying prediction.
    pub fn crowded_shell(n: u64) -> Vec<Satellite> {
        (0..n)
            .map(|k| satellite(k, coplanar(8.0, 0.02 * k as f64, 0.1 - 0.005 * k as f64)))
            .collect()
    }
}
