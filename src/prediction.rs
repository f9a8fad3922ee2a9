//! Close-approach prediction over a bounded lookahead window.
//!
//! For every satellite pair the predictor samples future positions,
//! finds the minimum separation, and converts it into a heuristic risk
//! score. The score is a weighted blend of how deep inside the safety
//! threshold the approach gets, how fast the bodies close, and how soon
//! the approach happens — a ranking heuristic, not a calibrated
//! statistical probability.

use bevy::math::DVec3;

use crate::orbit;
use crate::satellite::{Satellite, SatelliteId};
use crate::types::{
    DISTANCE_WEIGHT, DIVERGENCE_GRACE, DIVERGENCE_RATIO, PREDICTION_HORIZON, PREDICTION_STEP,
    REPORT_THRESHOLD, SAFE_DISTANCE, TIME_WEIGHT, VELOCITY_SATURATION, VELOCITY_WEIGHT,
};

/// A predicted close approach between two satellites.
///
/// Created fresh each prediction pass and never mutated; the whole list
/// is replaced, not merged, every tick.
#[derive(Clone, Debug)]
pub struct CollisionPrediction {
    /// First satellite of the pair (in scan order).
    pub first: SatelliteId,
    /// Second satellite of the pair.
    pub second: SatelliteId,
    /// Time-units until the predicted closest approach (≥ 0).
    pub time_to_collision: f64,
    /// Midpoint of the two predicted positions at closest approach.
    pub collision_point: DVec3,
    /// Heuristic risk score in [0, 1].
    pub probability: f64,
}

/// Ranking key: most severe and most imminent first.
fn severity(prediction: &CollisionPrediction) -> f64 {
    prediction.probability / (prediction.time_to_collision + 1.0)
}

/// Scan all satellite pairs for close approaches within the lookahead
/// horizon, anchored at `current_time` relative to the committed phases.
///
/// The simulation clock commits orbital angles before predicting and
/// passes 0 here, so the horizon starts at the just-committed state;
/// tests may anchor the scan anywhere. Returns predictions sorted by
/// descending [`severity`], ties keeping pair scan order (stable sort).
/// Zero or one satellite returns an empty list without scanning.
pub fn predict(satellites: &[Satellite], current_time: f64) -> Vec<CollisionPrediction> {
    let mut predictions = Vec::new();

    for i in 0..satellites.len() {
        for j in (i + 1)..satellites.len() {
            let first = &satellites[i];
            let second = &satellites[j];

            let mut min_separation = f64::INFINITY;
            let mut approach_time = -1.0;
            let mut approach_point = DVec3::ZERO;

            let mut t = 0.0;
            while t < PREDICTION_HORIZON {
                let future = current_time + t;
                let pos_a = orbit::position(&first.orbit, future);
                let pos_b = orbit::position(&second.orbit, future);
                let distance = orbit::separation(pos_a, pos_b);

                if distance < min_separation {
                    min_separation = distance;
                    approach_time = t;
                    approach_point = (pos_a + pos_b) * 0.5;
                }

                // Bodies are diverging; stop searching this pair.
                if t > DIVERGENCE_GRACE && distance > min_separation * DIVERGENCE_RATIO {
                    break;
                }

                t += PREDICTION_STEP;
            }

            if min_separation < SAFE_DISTANCE && approach_time >= 0.0 {
                let vel_a = orbit::velocity(&first.orbit, current_time + approach_time);
                let vel_b = orbit::velocity(&second.orbit, current_time + approach_time);
                let closing = orbit::relative_speed(vel_a, vel_b);

                let velocity_factor = (closing / VELOCITY_SATURATION).min(1.0);
                let distance_factor = ((SAFE_DISTANCE - min_separation) / SAFE_DISTANCE).max(0.0);
                let time_factor = (1.0 - approach_time / PREDICTION_HORIZON).max(0.0);

                let probability = (distance_factor * DISTANCE_WEIGHT
                    + velocity_factor * VELOCITY_WEIGHT
                    + time_factor * TIME_WEIGHT)
                    .min(1.0);

                if probability > REPORT_THRESHOLD {
                    predictions.push(CollisionPrediction {
                        first: first.id,
                        second: second.id,
                        time_to_collision: approach_time,
                        collision_point: approach_point,
                        probability,
                    });
                }
            }
        }
    }

    predictions.sort_by(|a, b| severity(b).total_cmp(&severity(a)));
    predictions
}
