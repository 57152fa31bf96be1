//! Time-indexed run history.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::events::ManeuverEvent;

/// One record per integration step.
///
/// `pos`/`vel` are the post-step state; `range_m`, `closing_speed_mps` and
/// the zone flags reflect the pre-step state the policies observed. Per-side
/// delta-v is that step's `dv_rate_last * dt`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Simulation time (s).
    pub t: f64,
    pub pos: DVec3,
    pub vel: DVec3,
    pub range_m: f64,
    pub closing_speed_mps: f64,
    /// Detection latch; once true it stays true.
    pub detected: bool,
    /// Strict `range < keep-out radius` at this step.
    pub inside_koz: bool,
    pub blue_dv_mps: f64,
    pub threat_dv_mps: f64,
}

/// Complete, append-only history of one run.
///
/// Holds `steps + 1` records (one per step index including step 0) plus the
/// per-side discrete event logs. Consumers read it only after the loop
/// completes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    pub records: Vec<StepRecord>,
    pub blue_events: Vec<ManeuverEvent>,
    pub threat_events: Vec<ManeuverEvent>,
}

impl History {
    pub fn with_capacity(records: usize) -> Self {
        Self {
            records: Vec::with_capacity(records),
            blue_events: Vec::new(),
            threat_events: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Step spacing inferred from the first two timestamps (0 if fewer
    /// than two records).
    pub fn dt(&self) -> f64 {
        if self.records.len() < 2 {
            0.0
        } else {
            self.records[1].t - self.records[0].t
        }
    }
}
