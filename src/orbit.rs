//! Orbital state calculation for satellites on circular inclined paths.
//!
//! Positions follow a simplified kinematic projection: a planar circular
//! path tilted by the inclination about the y axis, so the y component is
//! independent of inclination. This is intentionally not a full orbital-
//! plane rotation; it must stay bit-for-bit reproducible because cached
//! satellite positions, the lookahead predictor, and hosts rendering
//! orbit paths all rely on the same formula.

use bevy::math::DVec3;
use std::f64::consts::TAU;

use crate::satellite::OrbitalParams;

/// Position on the orbit at time offset `t` from the committed phase.
///
/// With θ = angle + speed·t, R = radius, i = inclination:
/// x = R·cos(θ)·cos(i), y = R·sin(θ), z = R·cos(θ)·sin(i).
///
/// The domain is all reals: R = 0 collapses the path to the origin and
/// NaN/∞ propagate through rather than being rejected.
pub fn position(orbit: &OrbitalParams, t: f64) -> DVec3 {
    let theta = orbit.angle + orbit.speed * t;
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_incl, cos_incl) = orbit.inclination.sin_cos();

    DVec3::new(
        orbit.radius * cos_theta * cos_incl,
        orbit.radius * sin_theta,
        orbit.radius * cos_theta * sin_incl,
    )
}

/// Velocity on the orbit at time offset `t`: the analytic time-derivative
/// of [`position`] with ω = speed.
pub fn velocity(orbit: &OrbitalParams, t: f64) -> DVec3 {
    let theta = orbit.angle + orbit.speed * t;
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_incl, cos_incl) = orbit.inclination.sin_cos();
    let tangential = orbit.radius * orbit.speed;

    DVec3::new(
        -tangential * sin_theta * cos_incl,
        tangential * cos_theta,
        -tangential * sin_theta * sin_incl,
    )
}

/// Euclidean separation between two positions.
pub fn separation(a: DVec3, b: DVec3) -> f64 {
    (a - b).length()
}

/// Magnitude of the relative velocity between two bodies.
pub fn relative_speed(va: DVec3, vb: DVec3) -> f64 {
    (va - vb).length()
}

/// Orbital period 2π/|ω|, or None for a degenerate zero-rate orbit.
pub fn orbital_period(speed: f64) -> Option<f64> {
    if speed == 0.0 {
        None
    } else {
        Some(TAU / speed.abs())
    }
}
