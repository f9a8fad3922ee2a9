//! Common test utilities for integration tests.

use conjunction::satellite::{name_for_index, OrbitalParams, Satellite, SatelliteId, SatelliteSpec, PALETTE};
use conjunction::simulation::SimulationState;
use std::f64::consts::PI;

/// An equatorial circular orbit with nominal mass and size.
pub fn coplanar_orbit(radius: f64, angle: f64, speed: f64) -> OrbitalParams {
    OrbitalParams {
        radius,
        speed,
        angle,
        inclination: 0.0,
        mass: 1000.0,
        size: 0.2,
    }
}

/// A spec with a generated name and palette color.
pub fn spec(index: u64, orbit: OrbitalParams) -> SatelliteSpec {
    SatelliteSpec {
        name: name_for_index(index),
        color: PALETTE[(index as usize) % PALETTE.len()],
        orbit,
    }
}

/// A standalone satellite with cached state at local time 0.
pub fn satellite(id: u64, orbit: OrbitalParams) -> Satellite {
    Satellite::from_spec(SatelliteId(id), spec(id, orbit))
}

/// Two satellites on one ring where the second slowly overtakes the
/// first. Their phases converge and the pair conjuncts well within the
/// prediction horizon.
pub fn catch_up_pair() -> Vec<Satellite> {
    vec![
        satellite(1, coplanar_orbit(8.0, 0.0, 0.1)),
        satellite(2, coplanar_orbit(8.0, PI + 0.001, 0.15)),
    ]
}

/// A state preloaded with the given satellites.
pub fn state_with(satellites: Vec<Satellite>) -> SimulationState {
    let mut state = SimulationState::default();
    for s in satellites {
        state.add_satellite(SatelliteSpec {
            name: s.name,
            color: s.color,
            orbit: s.orbit,
        });
    }
    state
}
