//! Core simulation constants for the close-approach engine.
//!
//! Distances are in simulation units (the central body has radius 5),
//! angles in radians, time in simulation time-units. The prediction and
//! imminence thresholds below are tuned heuristics; changing them changes
//! which conjunctions are reported and which are resolved.

/// Central body radius in simulation units. Informational for hosts;
/// the core never collides satellites with the central body.
pub const CENTRAL_BODY_RADIUS: f64 = 5.0;

/// Minimum safe separation between satellites. A pair whose predicted
/// closest approach falls below this distance is reported.
pub const SAFE_DISTANCE: f64 = 0.5;

/// How far into the future the predictor searches, in time-units.
pub const PREDICTION_HORIZON: f64 = 100.0;

/// Lookahead sampling step, in time-units.
pub const PREDICTION_STEP: f64 = 0.2;

/// Lookahead time after which a pair whose separation is growing past
/// `DIVERGENCE_RATIO` times the best approach so far stops being scanned.
pub const DIVERGENCE_GRACE: f64 = 10.0;

/// Separation growth ratio that terminates a pair scan (bodies diverging).
pub const DIVERGENCE_RATIO: f64 = 1.5;

/// Risk score weight for the closest-approach distance factor.
pub const DISTANCE_WEIGHT: f64 = 0.6;

/// Risk score weight for the relative-velocity factor.
pub const VELOCITY_WEIGHT: f64 = 0.3;

/// Risk score weight for the time-to-approach factor.
pub const TIME_WEIGHT: f64 = 0.1;

/// Relative speed at which the velocity factor saturates to 1.
pub const VELOCITY_SATURATION: f64 = 0.1;

/// Predictions scoring at or below this risk are not reported.
pub const REPORT_THRESHOLD: f64 = 0.1;

/// A prediction this close in time (and at least `IMMINENT_PROBABILITY`
/// likely) is treated as an unavoidable collision by the resolver.
pub const IMMINENT_TIME: f64 = 1.5;

/// Minimum risk score for a prediction to be treated as imminent.
pub const IMMINENT_PROBABILITY: f64 = 0.5;
