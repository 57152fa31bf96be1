//! Hill-frame relative state.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::RANGE_EPS;

/// Relative state of the threat with respect to Blue, expressed in the
/// Hill frame centered on Blue.
/// x = radial, y = along-track, z = cross-track.
///
/// Value-like: mutated once per step by the integrator, never elsewhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RelativeState {
    /// Relative position (meters).
    pub pos: DVec3,
    /// Relative velocity (m/s).
    pub vel: DVec3,
}

impl RelativeState {
    pub fn new(pos: DVec3, vel: DVec3) -> Self {
        Self { pos, vel }
    }

    /// Build from six scalars `[x, y, z, vx, vy, vz]`.
    pub fn from_components(c: [f64; 6]) -> Self {
        Self {
            pos: DVec3::new(c[0], c[1], c[2]),
            vel: DVec3::new(c[3], c[4], c[5]),
        }
    }

    /// Range from Blue (meters).
    pub fn range(&self) -> f64 {
        self.pos.length()
    }

    /// Closing speed (m/s). Positive means the gap is shrinking.
    pub fn closing_speed(&self) -> f64 {
        -self.pos.dot(self.vel) / (self.range() + RANGE_EPS)
    }

    /// Unit line-of-sight vector from Blue toward the threat.
    pub fn los_unit(&self) -> DVec3 {
        self.pos / (self.range() + RANGE_EPS)
    }
}
