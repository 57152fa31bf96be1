//! Core types and definitions for the PROXOPS encounter simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! the Hill-frame relative state, scenario configuration, run history,
//! maneuver events, and physical constants. It has no dependency on
//! any policy or engine code.

pub mod config;
pub mod constants;
pub mod events;
pub mod history;
pub mod types;
