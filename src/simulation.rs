//! Simulation state, command handling, and the tick driver.
//!
//! The whole simulation is one explicit [`SimulationState`] value owned
//! by the tick driver. Hosts mutate it only through [`Command`]s and
//! advance it through [`SimulationState::tick`]; the presentation layer
//! reads it between ticks. [`SimulationPlugin`] wires both into a Bevy
//! `App` so commands queue as events and are applied atomically before
//! each tick — a command can never observe a mid-tick state.

use bevy::prelude::*;

use crate::collision::{self, CollisionEvent, Explosion, ExplosionId, ResolvedCollision};
use crate::orbit;
use crate::prediction::{self, CollisionPrediction};
use crate::satellite::{Satellite, SatelliteId, SatelliteSpec};

/// Host-issued command, applied between ticks.
#[derive(Event, Clone, Debug)]
pub enum Command {
    /// Create a satellite from a spec; id and cached state are assigned
    /// by the simulation.
    AddSatellite(SatelliteSpec),
    /// Remove a satellite. Silent no-op for an unknown id.
    RemoveSatellite(SatelliteId),
    /// Set the time-scale multiplier. Must be positive.
    SetSpeed(f64),
    /// Run or pause the simulation clock.
    SetRunning(bool),
    /// Clear satellites, predictions, explosions, selection, and elapsed
    /// time back to the initial empty state.
    Reset,
    /// Replace the selection set.
    SetSelection(Vec<SatelliteId>),
    /// Toggle one satellite's membership in the selection set.
    ToggleSelection(SatelliteId),
    /// Empty the selection set.
    ClearSelection,
    /// Drop an expired explosion marker. Silent no-op for an unknown id.
    RemoveExplosion(ExplosionId),
}

/// The only rejected command input; all other malformed values (including
/// NaN orbital parameters) propagate through arithmetic unrejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("time-scale multiplier must be positive, got {0}")]
    NonPositiveSpeed(f64),
}

/// Everything one tick produced, for the host to render or log.
///
/// The ranked prediction list travels here because the resolver empties
/// the state's list at the end of every tick; `collisions` holds one
/// notice per satellite pair that was removed this tick.
#[derive(Debug, Default)]
pub struct TickReport {
    /// Ranked close-approach predictions computed this tick.
    pub predictions: Vec<CollisionPrediction>,
    /// Collisions resolved this tick.
    pub collisions: Vec<ResolvedCollision>,
}

/// Authoritative simulation state.
#[derive(Resource, Clone, Debug)]
pub struct SimulationState {
    /// Live satellites. Insertion order is irrelevant; ids are unique.
    pub satellites: Vec<Satellite>,
    /// Ranked prediction list from the latest tick. The resolver pass
    /// empties it; the plugin writes the tick's report back here so
    /// hosts can read the list between frames.
    pub predictions: Vec<CollisionPrediction>,
    /// Explosion markers awaiting removal by the presentation layer.
    pub explosions: Vec<Explosion>,
    /// Elapsed simulation time, monotonic while running.
    pub elapsed: f64,
    /// Whether ticks advance the simulation.
    pub running: bool,
    /// Time-scale multiplier applied to real frame deltas.
    pub speed: f64,
    /// Ids of satellites highlighted by the host. Pruned on removal.
    pub selected: Vec<SatelliteId>,
    satellite_counter: u64,
    explosion_counter: u64,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            satellites: Vec::new(),
            predictions: Vec::new(),
            explosions: Vec::new(),
            elapsed: 0.0,
            running: true,
            speed: 1.0,
            selected: Vec::new(),
            satellite_counter: 0,
            explosion_counter: 0,
        }
    }
}

impl SimulationState {
    /// Number of satellites spawned so far (including removed ones);
    /// hosts use this to pick the next generated name.
    pub fn spawn_count(&self) -> u64 {
        self.satellite_counter
    }

    /// Create a satellite from a spec and return its id. The initial
    /// position and velocity are computed from the orbit at local time 0.
    pub fn add_satellite(&mut self, spec: SatelliteSpec) -> SatelliteId {
        let id = SatelliteId(self.satellite_counter);
        self.satellite_counter += 1;
        self.satellites.push(Satellite::from_spec(id, spec));
        id
    }

    /// Remove a satellite and prune it from the selection. Unknown ids
    /// are a silent no-op.
    pub fn remove_satellite(&mut self, id: SatelliteId) {
        self.satellites.retain(|s| s.id != id);
        self.selected.retain(|selected| *selected != id);
    }

    /// Set the time-scale multiplier; rejects non-positive (or NaN)
    /// values without touching the state.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), CommandError> {
        if !(speed > 0.0) {
            return Err(CommandError::NonPositiveSpeed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    /// Clear the world back to its initial empty state. The run flag and
    /// speed multiplier are deliberately left alone so a reset mid-pause
    /// stays paused.
    pub fn reset(&mut self) {
        self.satellites.clear();
        self.predictions.clear();
        self.explosions.clear();
        self.selected.clear();
        self.elapsed = 0.0;
        self.satellite_counter = 0;
        self.explosion_counter = 0;
    }

    /// Toggle one satellite's membership in the selection set. Unknown
    /// ids toggle in and are pruned once the satellite is confirmed gone,
    /// matching best-effort snapshot semantics.
    pub fn toggle_selection(&mut self, id: SatelliteId) {
        if let Some(index) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(index);
        } else if self.satellites.iter().any(|s| s.id == id) {
            self.selected.push(id);
        }
    }

    /// Drop an explosion marker once the host has finished displaying it.
    pub fn remove_explosion(&mut self, id: ExplosionId) {
        self.explosions.retain(|e| e.id != id);
    }

    /// Advance the simulation by a scaled real-time delta and run one
    /// full predict/resolve pass.
    ///
    /// Sequence: scale the delta, advance elapsed time, commit every
    /// satellite's orbital angle and refresh its cached position and
    /// velocity at local time 0, predict close approaches anchored at
    /// the committed state, then resolve imminent ones. Paused states
    /// return an empty report and change nothing.
    pub fn tick(&mut self, real_dt: f64) -> TickReport {
        if !self.running {
            return TickReport::default();
        }

        let sim_dt = real_dt * self.speed;
        self.elapsed += sim_dt;

        for satellite in &mut self.satellites {
            satellite.orbit.angle += satellite.orbit.speed * sim_dt;
            satellite.position = orbit::position(&satellite.orbit, 0.0);
            satellite.velocity = orbit::velocity(&satellite.orbit, 0.0);
        }

        // Angles were just committed, so the lookahead is anchored at 0.
        self.predictions = prediction::predict(&self.satellites, 0.0);

        let resolution = collision::resolve(
            &self.satellites,
            &self.predictions,
            self.elapsed,
            &mut self.explosion_counter,
        );
        self.satellites = resolution.survivors;
        self.selected
            .retain(|id| self.satellites.iter().any(|s| s.id == *id));
        self.explosions.extend(resolution.explosions);

        // The resolver pass consumes the batch; the ranked list leaves
        // through the report and the state ends the tick empty.
        TickReport {
            predictions: std::mem::take(&mut self.predictions),
            collisions: resolution.collisions,
        }
    }
}

/// Apply one command to the state.
pub fn apply(state: &mut SimulationState, command: Command) -> Result<(), CommandError> {
    match command {
        Command::AddSatellite(spec) => {
            let id = state.add_satellite(spec);
            info!("Spawned satellite {:?}", id);
        }
        Command::RemoveSatellite(id) => state.remove_satellite(id),
        Command::SetSpeed(speed) => state.set_speed(speed)?,
        Command::SetRunning(running) => state.running = running,
        Command::Reset => {
            info!("Resetting simulation");
            state.reset();
        }
        Command::SetSelection(ids) => state.selected = ids,
        Command::ToggleSelection(id) => state.toggle_selection(id),
        Command::ClearSelection => state.selected.clear(),
        Command::RemoveExplosion(id) => state.remove_explosion(id),
    }
    Ok(())
}

/// Plugin wiring the simulation into a host `App`.
///
/// Commands queue as Bevy events and are applied before the tick runs,
/// so every command observes a consistent between-ticks state.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationState>()
            .add_event::<Command>()
            .add_event::<CollisionEvent>()
            .add_systems(Update, (apply_commands, advance_simulation).chain());
    }
}

/// Drain queued commands into the state. Rejected commands are logged
/// and dropped; the state is never left half-applied.
fn apply_commands(mut state: ResMut<SimulationState>, mut commands: EventReader<Command>) {
    for command in commands.read() {
        if let Err(err) = apply(&mut state, command.clone()) {
            warn!("Rejected command: {err}");
        }
    }
}

/// Drive one tick per frame from the host's clock and forward resolved
/// collisions as events.
fn advance_simulation(
    mut state: ResMut<SimulationState>,
    time: Res<Time>,
    mut collision_events: EventWriter<CollisionEvent>,
) {
    let TickReport {
        predictions,
        collisions,
    } = state.tick(time.delta_secs_f64());

    for collision in collisions {
        info!(
            "CONJUNCTION! {} and {} collided at ({:.2}, {:.2}, {:.2})",
            collision.first,
            collision.second,
            collision.point.x,
            collision.point.y,
            collision.point.z,
        );
        collision_events.send(CollisionEvent {
            first: collision.first,
            second: collision.second,
            point: collision.point,
            time: state.elapsed,
        });
    }

    // Hold the ranked list in the state until the next tick recomputes
    // it, so hosts can render close-approach warnings between frames.
    // A paused frame keeps the last list on display.
    if state.running {
        state.predictions = predictions;
    }
}
