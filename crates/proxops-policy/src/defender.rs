//! Defender-side keep-out policies.
//!
//! Both variants execute at most one perpendicular evasive burn per run,
//! triggered the first time the threat is inside the keep-out radius while
//! still closing. They differ only in how the perpendicular's sign is
//! chosen and in the event tag they emit, so the trigger and burn
//! bookkeeping are factored into a shared core.

use glam::DVec3;

use proxops_core::config::PolicyParams;
use proxops_core::events::EventTag;
use proxops_core::types::RelativeState;

use crate::geometry::perpendicular_to_los;

/// Behavior of the defending side.
///
/// Same bookkeeping contract as the threat trait: `command` must update
/// `dv_rate_last`/`total_dv` before returning.
pub trait DefenderPolicy {
    /// Clear mutable policy state. Called once before a run begins.
    fn reset(&mut self);

    /// Posture hook, invoked exactly once at the first step where range
    /// drops to or below the detection radius. May be a no-op.
    fn on_detect(&mut self, t: f64, state: &RelativeState);

    /// Commanded acceleration (m/s^2) for this step, plus an event tag
    /// on the step a maneuver fires.
    fn command(
        &mut self,
        t: f64,
        state: &RelativeState,
        n: f64,
        range_m: f64,
        closing_mps: f64,
        koz_radius_m: f64,
    ) -> (DVec3, Option<EventTag>);

    /// Magnitude of the last commanded burn as a one-second-equivalent
    /// delta-v rate (m/s).
    fn dv_rate_last(&self) -> f64;

    /// Cumulative delta-v expended this run (m/s). Non-decreasing.
    fn total_dv(&self) -> f64;
}

/// Trigger check and burn bookkeeping shared by the single-dodge variants.
#[derive(Debug, Clone)]
struct DodgeCore {
    dodge_dv_mps: f64,
    did_dodge: bool,
    dv_rate_last: f64,
    total_dv: f64,
}

impl DodgeCore {
    fn new(dodge_dv_mps: f64) -> Self {
        Self {
            dodge_dv_mps,
            did_dodge: false,
            dv_rate_last: 0.0,
            total_dv: 0.0,
        }
    }

    fn reset(&mut self) {
        self.did_dodge = false;
        self.dv_rate_last = 0.0;
        self.total_dv = 0.0;
    }

    /// Fire the dodge if the trigger condition holds this step.
    ///
    /// `side` selects the perpendicular's sign (+1 right, -1 left). The
    /// dodge latch is permanent for the rest of the run: only `reset`
    /// clears it.
    fn try_dodge(
        &mut self,
        state: &RelativeState,
        range_m: f64,
        closing_mps: f64,
        koz_radius_m: f64,
        side: f64,
    ) -> Option<DVec3> {
        self.dv_rate_last = 0.0;
        if self.did_dodge || range_m >= koz_radius_m || closing_mps <= 0.0 {
            return None;
        }
        let dir = side * perpendicular_to_los(state.los_unit());
        self.did_dodge = true;
        self.dv_rate_last = self.dodge_dv_mps;
        self.total_dv += self.dodge_dv_mps;
        Some(self.dodge_dv_mps * dir)
    }
}

/// Basic defender: one fixed-magnitude perpendicular dodge, generic tag.
#[derive(Debug, Clone)]
pub struct KeepOutPolicy {
    core: DodgeCore,
}

impl KeepOutPolicy {
    pub fn new(dodge_dv_mps: f64) -> Self {
        Self {
            core: DodgeCore::new(dodge_dv_mps),
        }
    }
}

impl DefenderPolicy for KeepOutPolicy {
    fn reset(&mut self) {
        self.core.reset();
    }

    fn on_detect(&mut self, _t: f64, _state: &RelativeState) {
        // Posture hook; nothing to adjust yet.
    }

    fn command(
        &mut self,
        _t: f64,
        state: &RelativeState,
        _n: f64,
        range_m: f64,
        closing_mps: f64,
        koz_radius_m: f64,
    ) -> (DVec3, Option<EventTag>) {
        match self
            .core
            .try_dodge(state, range_m, closing_mps, koz_radius_m, 1.0)
        {
            Some(accel) => (accel, Some(EventTag::Dodge)),
            None => (DVec3::ZERO, None),
        }
    }

    fn dv_rate_last(&self) -> f64 {
        self.core.dv_rate_last
    }

    fn total_dv(&self) -> f64 {
        self.core.total_dv
    }
}

/// Heuristic defender: same trigger and magnitude as [`KeepOutPolicy`],
/// but the dodge direction's sign is chosen deterministically from the
/// along-track position (ahead of Blue steers left, behind steers right),
/// and the emitted tag carries that direction.
///
/// This stands in for an external decision policy; the choice is a plain
/// deterministic branch, no inference call.
#[derive(Debug, Clone)]
pub struct LlmHeuristicPolicy {
    core: DodgeCore,
}

impl LlmHeuristicPolicy {
    pub fn new(dodge_dv_mps: f64) -> Self {
        Self {
            core: DodgeCore::new(dodge_dv_mps),
        }
    }
}

impl DefenderPolicy for LlmHeuristicPolicy {
    fn reset(&mut self) {
        self.core.reset();
    }

    fn on_detect(&mut self, _t: f64, _state: &RelativeState) {}

    fn command(
        &mut self,
        _t: f64,
        state: &RelativeState,
        _n: f64,
        range_m: f64,
        closing_mps: f64,
        koz_radius_m: f64,
    ) -> (DVec3, Option<EventTag>) {
        let side = if state.pos.y > 0.0 { -1.0 } else { 1.0 };
        match self
            .core
            .try_dodge(state, range_m, closing_mps, koz_radius_m, side)
        {
            Some(accel) if side < 0.0 => (accel, Some(EventTag::AiDodgeLeft)),
            Some(accel) => (accel, Some(EventTag::AiDodgeRight)),
            None => (DVec3::ZERO, None),
        }
    }

    fn dv_rate_last(&self) -> f64 {
        self.core.dv_rate_last
    }

    fn total_dv(&self) -> f64 {
        self.core.total_dv
    }
}

/// Instantiate the defender variant selected by the front end.
pub fn defender_for(params: &PolicyParams) -> Box<dyn DefenderPolicy> {
    if params.ai_defender {
        Box::new(LlmHeuristicPolicy::new(params.dodge_dv_mps))
    } else {
        Box::new(KeepOutPolicy::new(params.dodge_dv_mps))
    }
}
