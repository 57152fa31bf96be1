//! Encounter simulation engine for PROXOPS.
//!
//! Integrates the Clohessy-Wiltshire relative dynamics under the two
//! sides' maneuver policies, producing a run history, and scores the
//! completed run. Completely headless and single-threaded, enabling
//! deterministic testing: with zero process noise a run is a pure
//! function of its configuration.

pub mod dynamics;
pub mod engine;
pub mod scoring;

pub use engine::{run_encounter, run_scenario};
pub use proxops_core as core;
pub use scoring::{score_run, Outcome, Score};

#[cfg(test)]
mod tests;
