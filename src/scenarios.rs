//! Preset constellations for demonstrations and testing.
//!
//! Each scenario resets the simulation and loads a small formation
//! showing one close-approach behavior: a head-on encounter, a slow
//! catch-up on a shared ring, a stable ring that never conjuncts, and a
//! two-plane node crossing. `sandbox` is the empty free-play state.

use bevy::prelude::*;
use std::f64::consts::PI;

use crate::satellite::{OrbitalParams, SatelliteSpec, PALETTE};
use crate::simulation::SimulationState;

/// A predefined scenario configuration.
#[derive(Clone, Copy, Debug)]
pub struct Scenario {
    /// Unique identifier for the scenario.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Brief description of the scenario.
    pub description: &'static str,
    /// Initial time-scale multiplier.
    pub speed: f64,
    /// Whether the clock starts running.
    pub start_running: bool,
}

/// All built-in scenarios, in menu order.
pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        id: "head_on",
        name: "Head-on Encounter",
        description: "Two satellites share a ring in opposite directions",
        speed: 1.0,
        start_running: true,
    },
    Scenario {
        id: "catch_up",
        name: "Catch-up Conjunction",
        description: "A faster satellite slowly overtakes a slower one",
        speed: 1.0,
        start_running: true,
    },
    Scenario {
        id: "stable_ring",
        name: "Stable Ring",
        description: "Six evenly spaced satellites that never approach",
        speed: 1.0,
        start_running: true,
    },
    Scenario {
        id: "node_crossing",
        name: "Node Crossing",
        description: "Two orbital planes meeting at a shared node",
        speed: 1.0,
        start_running: true,
    },
    Scenario {
        id: "sandbox",
        name: "Sandbox",
        description: "Empty sky for free experimentation",
        speed: 1.0,
        start_running: true,
    },
];

/// Error loading a scenario.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ScenarioError {
    #[error("unknown scenario id: {0}")]
    Unknown(String),
}

/// Get a scenario by id.
pub fn get_scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

fn spec(name: &str, color_index: usize, orbit: OrbitalParams) -> SatelliteSpec {
    SatelliteSpec {
        name: name.to_owned(),
        color: PALETTE[color_index % PALETTE.len()],
        orbit,
    }
}

fn ring_orbit(radius: f64, angle: f64, speed: f64, inclination: f64) -> OrbitalParams {
    OrbitalParams {
        radius,
        speed,
        angle,
        inclination,
        mass: 1000.0,
        size: 0.2,
    }
}

/// Satellite formation for a scenario id.
fn scenario_satellites(id: &str) -> Vec<SatelliteSpec> {
    match id {
        "head_on" => vec![
            spec("Satellite A", 0, ring_orbit(8.0, 0.0, 0.1, 0.0)),
            spec("Satellite B", 4, ring_orbit(8.0, PI, -0.1, 0.0)),
        ],
        "catch_up" => vec![
            spec("Satellite A", 0, ring_orbit(8.0, 0.0, 0.1, 0.0)),
            spec("Satellite B", 3, ring_orbit(8.0, PI + 0.001, 0.15, 0.0)),
        ],
        "stable_ring" => (0..6)
            .map(|k| {
                spec(
                    &crate::satellite::name_for_index(k),
                    k as usize,
                    ring_orbit(9.0, k as f64 * PI / 3.0, 0.08, 0.0),
                )
            })
            .collect(),
        "node_crossing" => vec![
            spec("Satellite A", 1, ring_orbit(8.0, 0.0, 0.1, 0.0)),
            spec("Satellite B", 2, ring_orbit(8.0, 0.0, 0.1, 0.5)),
        ],
        // sandbox and anything else starts empty
        _ => Vec::new(),
    }
}

/// Reset the state and load a scenario into it.
///
/// Unknown ids leave the state untouched and return an error.
pub fn load_scenario(
    state: &mut SimulationState,
    id: &str,
) -> Result<&'static Scenario, ScenarioError> {
    let scenario = get_scenario(id).ok_or_else(|| ScenarioError::Unknown(id.to_owned()))?;

    state.reset();
    state.running = scenario.start_running;
    let speed_applied = state.set_speed(scenario.speed);
    debug_assert!(speed_applied.is_ok(), "scenario table speeds are positive");

    for satellite in scenario_satellites(id) {
        state.add_satellite(satellite);
    }

    Ok(scenario)
}

/// Event to trigger loading a scenario.
#[derive(Event, Clone, Debug)]
pub struct LoadScenarioEvent {
    /// ID of the scenario to load.
    pub scenario_id: &'static str,
}

/// Plugin providing scenario management.
pub struct ScenarioPlugin;

impl Plugin for ScenarioPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<LoadScenarioEvent>()
            .add_systems(Update, handle_load_scenario_event);
    }
}

/// Handle scenario loading events.
fn handle_load_scenario_event(
    mut events: EventReader<LoadScenarioEvent>,
    mut state: ResMut<SimulationState>,
) {
    for event in events.read() {
        match load_scenario(&mut state, event.scenario_id) {
            Ok(scenario) => info!("Loaded scenario: {} ({})", scenario.name, scenario.id),
            Err(err) => warn!("{err}"),
        }
    }
}
