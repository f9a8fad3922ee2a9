//! Collision resolution for imminent close approaches.
//!
//! The resolver consumes one batch of predictions, decides which are
//! unavoidable, removes the involved satellites, and emits explosion
//! markers for the presentation layer. It is a one-shot filter-and-react
//! pass: every resolution leaves the prediction list empty and the next
//! tick recomputes it from scratch.

use bevy::math::DVec3;
use bevy::prelude::*;
use std::collections::HashSet;

use crate::prediction::CollisionPrediction;
use crate::satellite::{Satellite, SatelliteId};
use crate::types::{IMMINENT_PROBABILITY, IMMINENT_TIME};

/// Opaque unique identifier for an explosion marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExplosionId(pub u64);

/// Transient visual marker left where two satellites collided.
///
/// The core never expires these; the presentation layer removes them
/// after its display duration (via `Command::RemoveExplosion`), so
/// pausing the simulation cannot discard a pending effect.
#[derive(Clone, Debug)]
pub struct Explosion {
    /// Unique id, used by the host to remove the marker once played.
    pub id: ExplosionId,
    /// Position of the resolved collision point.
    pub position: DVec3,
    /// Color inherited from the first satellite of the pair.
    pub color: Color,
    /// Elapsed simulation time when the explosion was created.
    pub timestamp: f64,
}

/// Host-facing notice of a resolved collision, for logging and UI.
#[derive(Clone, Debug)]
pub struct ResolvedCollision {
    /// Name of the first satellite of the pair (both were removed).
    pub first: String,
    /// Name of the second satellite of the pair.
    pub second: String,
    /// Resolved collision point.
    pub point: DVec3,
    /// Lookahead time at which the approach was predicted.
    pub time_to_collision: f64,
}

/// Outcome of one resolution pass.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Satellites that were not involved in an imminent collision.
    pub survivors: Vec<Satellite>,
    /// One explosion per processed imminent prediction.
    pub explosions: Vec<Explosion>,
    /// One notice per processed imminent prediction.
    pub collisions: Vec<ResolvedCollision>,
}

/// Bevy event fired by the simulation plugin for each resolved collision.
#[derive(Event, Clone, Debug)]
pub struct CollisionEvent {
    /// Names of the two satellites that were removed.
    pub first: String,
    /// Name of the second satellite.
    pub second: String,
    /// Resolved collision point.
    pub point: DVec3,
    /// Elapsed simulation time of resolution.
    pub time: f64,
}

/// Is this prediction close enough in time and likely enough to react to?
pub fn is_imminent(prediction: &CollisionPrediction) -> bool {
    prediction.time_to_collision <= IMMINENT_TIME
        && prediction.probability >= IMMINENT_PROBABILITY
}

/// Process one batch of predictions against a satellite snapshot.
///
/// Each imminent prediction whose both ids are still present spawns one
/// explosion (first satellite's color) and marks both satellites for
/// removal; marking is idempotent, so overlapping predictions in the
/// same batch are fine. A prediction referencing an id that is no longer
/// in the snapshot (removed by a command between passes) is treated as
/// already resolved and skipped — never a fault. `timestamp` is the
/// elapsed simulation time stamped onto explosions; `next_explosion_id`
/// supplies their ids.
pub fn resolve(
    satellites: &[Satellite],
    predictions: &[CollisionPrediction],
    timestamp: f64,
    next_explosion_id: &mut u64,
) -> Resolution {
    let mut doomed: HashSet<SatelliteId> = HashSet::new();
    let mut explosions = Vec::new();
    let mut collisions = Vec::new();

    for prediction in predictions.iter().filter(|p| is_imminent(p)) {
        let first = satellites.iter().find(|s| s.id == prediction.first);
        let second = satellites.iter().find(|s| s.id == prediction.second);
        let (Some(first), Some(second)) = (first, second) else {
            continue;
        };

        *next_explosion_id += 1;
        explosions.push(Explosion {
            id: ExplosionId(*next_explosion_id),
            position: prediction.collision_point,
            color: first.color,
            timestamp,
        });
        collisions.push(ResolvedCollision {
            first: first.name.clone(),
            second: second.name.clone(),
            point: prediction.collision_point,
            time_to_collision: prediction.time_to_collision,
        });

        doomed.insert(prediction.first);
        doomed.insert(prediction.second);
    }

    let survivors = satellites
        .iter()
        .filter(|s| !doomed.contains(&s.id))
        .cloned()
        .collect();

    Resolution {
        survivors,
        explosions,
        collisions,
    }
}
