//! Conjunction - Satellite Close-Approach Simulator
//!
//! A library crate providing the orbital-state propagation and
//! collision-prediction/resolution core for a satellite constellation
//! around a central body. Rendering and UI are left to the host
//! application; the core is driven one tick per frame.

pub mod collision;
pub mod orbit;
pub mod prediction;
pub mod satellite;
pub mod scenarios;
pub mod simulation;
pub mod types;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod proptest_orbit;
