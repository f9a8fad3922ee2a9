//! Satellite data model and spawning parameters.
//!
//! Satellites are the simulated bodies orbiting the central body. Their
//! position and velocity are cached projections of the orbital parameters
//! and the elapsed time — the clock recomputes both every tick, so the
//! orbital parameters are the only source of truth.

use bevy::math::DVec3;
use bevy::prelude::*;
use rand::Rng;
use std::f64::consts::TAU;

use crate::orbit;

/// Opaque unique identifier for a satellite, assigned by the simulation
/// state at creation and never reused within one state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SatelliteId(pub u64);

/// Orbital parameters of a circular inclined path.
///
/// `angle` is the angular phase committed at the last simulation tick;
/// position queries take a time offset relative to that commit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalParams {
    /// Orbit radius in simulation units (> 0 by convention).
    pub radius: f64,
    /// Angular rate in radians per time-unit; any real sign/magnitude.
    pub speed: f64,
    /// Committed angular phase in radians.
    pub angle: f64,
    /// Path tilt in radians, conventionally in [-π/2, π/2].
    pub inclination: f64,
    /// Mass in kg. Informational only; unused by the physics.
    pub mass: f64,
    /// Visual radius in simulation units; collision thresholds are fixed
    /// and do not read this.
    pub size: f64,
}

/// Creation payload for a satellite. The simulation state assigns the id
/// and computes the initial position/velocity from the orbit.
#[derive(Clone, Debug)]
pub struct SatelliteSpec {
    /// Display name.
    pub name: String,
    /// Display color, also inherited by explosion effects.
    pub color: Color,
    /// Initial orbital parameters.
    pub orbit: OrbitalParams,
}

/// A live satellite in the simulation.
#[derive(Clone, Debug)]
pub struct Satellite {
    /// Unique id.
    pub id: SatelliteId,
    /// Display name.
    pub name: String,
    /// Cached position, recomputed from `orbit` each tick.
    pub position: DVec3,
    /// Cached velocity, recomputed from `orbit` each tick.
    pub velocity: DVec3,
    /// Display color.
    pub color: Color,
    /// Orbital parameters (source of truth for position/velocity).
    pub orbit: OrbitalParams,
}

impl Satellite {
    /// Build a satellite from a spec, with cached state taken from the
    /// orbit at local time 0.
    pub fn from_spec(id: SatelliteId, spec: SatelliteSpec) -> Self {
        Self {
            id,
            name: spec.name,
            position: orbit::position(&spec.orbit, 0.0),
            velocity: orbit::velocity(&spec.orbit, 0.0),
            color: spec.color,
            orbit: spec.orbit,
        }
    }
}

/// Display palette cycled through by generated satellites.
pub const PALETTE: [Color; 5] = [
    Color::srgb(0.376, 0.647, 0.980), // blue
    Color::srgb(0.655, 0.545, 0.980), // violet
    Color::srgb(0.204, 0.827, 0.600), // green
    Color::srgb(0.984, 0.749, 0.141), // amber
    Color::srgb(0.973, 0.443, 0.443), // red
];

/// Generate the display name for the nth spawned satellite: "Satellite A",
/// "Satellite B", ... cycling through the alphabet.
pub fn name_for_index(index: u64) -> String {
    let letter = (b'A' + (index % 26) as u8) as char;
    format!("Satellite {letter}")
}

/// Draw random orbital parameters for a new satellite.
///
/// Radius lands between 7 and 12 units from the central body's center,
/// the orbital period between 50 and 150 time-units, and the inclination
/// within ±45°. Mass and size are cosmetic.
pub fn random_spec<R: Rng + ?Sized>(index: u64, rng: &mut R) -> SatelliteSpec {
    let period = 50.0 + rng.gen_range(0.0..100.0);

    SatelliteSpec {
        name: name_for_index(index),
        color: PALETTE[rng.gen_range(0..PALETTE.len())],
        orbit: OrbitalParams {
            radius: 7.0 + rng.gen_range(0.0..5.0),
            speed: TAU / period,
            angle: rng.gen_range(0.0..TAU),
            inclination: rng.gen_range(-0.25 * std::f64::consts::PI..0.25 * std::f64::consts::PI),
            mass: 500.0 + rng.gen_range(0.0..2000.0),
            size: 0.1 + rng.gen_range(0.0..0.2),
        },
    }
}
