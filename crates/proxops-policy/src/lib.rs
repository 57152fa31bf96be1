//! Maneuver policies for PROXOPS.
//!
//! Implements the rule-based threat and defender behaviors that command
//! accelerations during an encounter. Policies are stateful across steps
//! (delta-v bookkeeping, dodge latch) and reset at run start; the engine
//! crate drives them through the [`ThreatPolicy`] and [`DefenderPolicy`]
//! traits.

pub mod defender;
pub mod geometry;
pub mod threat;

pub use defender::{defender_for, DefenderPolicy, KeepOutPolicy, LlmHeuristicPolicy};
pub use threat::{threat_for, ThreatApproach, ThreatPolicy};

pub use proxops_core as core;
