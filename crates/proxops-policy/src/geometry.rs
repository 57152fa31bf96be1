//! Shared dodge geometry.
//!
//! Both defender variants burn perpendicular to the line-of-sight; only the
//! sign of the direction differs. The basis construction lives here so the
//! variants share it without a type hierarchy.

use glam::DVec3;

use proxops_core::constants::{DEGENERATE_CROSS_NORM, RANGE_EPS};

/// Unit vector perpendicular to the line-of-sight.
///
/// Crosses the LOS with the cross-track axis. If the LOS is nearly parallel
/// to it the cross product degenerates, and the along-track axis is used
/// instead, so the result is always well defined.
pub fn perpendicular_to_los(los_hat: DVec3) -> DVec3 {
    let mut basis = los_hat.cross(DVec3::Z);
    if basis.length() < DEGENERATE_CROSS_NORM {
        basis = los_hat.cross(DVec3::Y);
    }
    basis / (basis.length() + RANGE_EPS)
}
