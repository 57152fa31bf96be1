//! Discrete maneuver events recorded during a run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of maneuver a policy executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventTag {
    /// Generic perpendicular evasive burn by the defender.
    Dodge,
    /// Heuristic defender steered to the left perpendicular.
    AiDodgeLeft,
    /// Heuristic defender steered to the right perpendicular.
    AiDodgeRight,
}

impl fmt::Display for EventTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventTag::Dodge => "DODGE",
            EventTag::AiDodgeLeft => "AI_DODGE_LEFT",
            EventTag::AiDodgeRight => "AI_DODGE_RIGHT",
        };
        f.write_str(s)
    }
}

/// A timestamped maneuver event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ManeuverEvent {
    /// Simulation time at which the event fired (s).
    pub t: f64,
    pub tag: EventTag,
}
