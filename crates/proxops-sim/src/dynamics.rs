//! Linearized relative-motion (Clohessy-Wiltshire/Hill) dynamics.
//!
//! Valid for short-duration proximity operations around a circular
//! reference orbit; no eccentricity, J2, or full two-body terms.

use glam::DVec3;

use proxops_core::types::RelativeState;

/// Instantaneous time-derivative of a relative state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateDerivative {
    /// d(position)/dt (m/s).
    pub vel: DVec3,
    /// d(velocity)/dt (m/s^2).
    pub acc: DVec3,
}

/// Clohessy-Wiltshire derivatives in the Hill frame
/// (x = radial, y = along-track, z = cross-track):
///
/// ```text
/// dvx/dt =  3n²x + 2n·vy + ax
/// dvy/dt = -2n·vx       + ay
/// dvz/dt = -n²z         + az
/// ```
///
/// Pure and deterministic; `n` is the mean motion of the reference orbit
/// and `accel` the net commanded acceleration.
pub fn cw_derivatives(n: f64, state: &RelativeState, accel: DVec3) -> StateDerivative {
    let r = state.pos;
    let v = state.vel;
    StateDerivative {
        vel: v,
        acc: DVec3::new(
            3.0 * n * n * r.x + 2.0 * n * v.y + accel.x,
            -2.0 * n * v.x + accel.y,
            -n * n * r.z + accel.z,
        ),
    }
}
