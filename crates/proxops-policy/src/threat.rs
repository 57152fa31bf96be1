//! Threat-side approach policy.

use glam::DVec3;

use proxops_core::config::PolicyParams;
use proxops_core::constants::LOS_MIN_RANGE_M;
use proxops_core::types::RelativeState;

/// Behavior of the approaching side.
///
/// `command` is invoked once per step with the pre-step state and must
/// update the policy's delta-v bookkeeping before returning: the loop
/// reads [`dv_rate_last`](ThreatPolicy::dv_rate_last) immediately after
/// the call to tally fuel use for that step.
pub trait ThreatPolicy {
    /// Clear mutable policy state. Called once before a run begins.
    fn reset(&mut self);

    /// Commanded acceleration (m/s^2) for this step.
    fn command(
        &mut self,
        t: f64,
        state: &RelativeState,
        n: f64,
        range_m: f64,
        closing_mps: f64,
    ) -> DVec3;

    /// Magnitude of the last commanded burn as a one-second-equivalent
    /// delta-v rate (m/s).
    fn dv_rate_last(&self) -> f64;

    /// Cumulative delta-v expended this run (m/s). Non-decreasing.
    fn total_dv(&self) -> f64;
}

/// Drives the threat toward a desired closing speed by burning along the
/// instantaneous line-of-sight: toward the target when under-closing,
/// away when over-closing. Burns continuously, not impulsively.
#[derive(Debug, Clone)]
pub struct ThreatApproach {
    desired_closing_mps: f64,
    dv_rate_limit_mps: f64,
    dv_rate_last: f64,
    total_dv: f64,
}

impl ThreatApproach {
    pub fn new(desired_closing_mps: f64, dv_rate_limit_mps: f64) -> Self {
        Self {
            desired_closing_mps,
            dv_rate_limit_mps,
            dv_rate_last: 0.0,
            total_dv: 0.0,
        }
    }
}

impl ThreatPolicy for ThreatApproach {
    fn reset(&mut self) {
        self.dv_rate_last = 0.0;
        self.total_dv = 0.0;
    }

    fn command(
        &mut self,
        _t: f64,
        state: &RelativeState,
        _n: f64,
        range_m: f64,
        closing_mps: f64,
    ) -> DVec3 {
        // The LOS direction is singular at point-blank range; coast instead.
        if range_m < LOS_MIN_RANGE_M {
            self.dv_rate_last = 0.0;
            return DVec3::ZERO;
        }
        let los_hat = state.pos / range_m;
        let err = self.desired_closing_mps - closing_mps;
        let accel_mag = err.clamp(-self.dv_rate_limit_mps, self.dv_rate_limit_mps);
        self.dv_rate_last = accel_mag.abs();
        self.total_dv += accel_mag.abs();
        // Under-closing burns along -LOS (toward Blue) to speed the approach.
        -accel_mag * los_hat
    }

    fn dv_rate_last(&self) -> f64 {
        self.dv_rate_last
    }

    fn total_dv(&self) -> f64 {
        self.total_dv
    }
}

/// Instantiate the threat policy from front-end parameters.
pub fn threat_for(params: &PolicyParams) -> ThreatApproach {
    ThreatApproach::new(params.desired_closing_mps, params.burn_rate_limit_mps)
}
