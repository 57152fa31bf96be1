//! Post-run scoring.

use std::fmt;

use serde::{Deserialize, Serialize};

use proxops_core::history::History;

/// Categorical outcome of a run.
///
/// Evaluated in declaration order, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Detection occurred and the keep-out zone was never entered.
    KozMaintained,
    /// The KOZ was entered but Blue spent fuel recovering.
    KozViolatedWithDodge,
    /// The KOZ was entered and Blue never burned.
    KozViolatedNoDodge,
    /// No detection consequence and no KOZ entry.
    NoEncounter,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::KozMaintained => "Blue maintained KOZ with timely detection",
            Outcome::KozViolatedWithDodge => "KOZ violated briefly; Blue recovered with dodge",
            Outcome::KozViolatedNoDodge => "KOZ violated (no dodge)",
            Outcome::NoEncounter => "No encounter",
        };
        f.write_str(s)
    }
}

/// Summary metrics derived once from a completed history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    /// Time of first detection (s), `None` if never detected.
    pub detection_time_s: Option<f64>,
    /// Minimum range across the run (m).
    pub closest_approach_m: f64,
    /// Total time spent inside the keep-out zone (s).
    pub time_inside_koz_s: f64,
    /// Blue's total delta-v (m/s).
    pub blue_total_dv_mps: f64,
    /// Threat's total delta-v (m/s).
    pub threat_total_dv_mps: f64,
    pub outcome: Outcome,
}

impl Score {
    /// One-line textual summary with the front end's fixed precisions.
    pub fn summary(&self) -> String {
        let detection = match self.detection_time_s {
            Some(t) => format!("{t:.1} s"),
            None => "never".to_string(),
        };
        format!(
            "{}. Detection: {}, closest approach: {:.1} m, \
             time inside KOZ: {:.1} s, Blue dV: {:.3} m/s, Threat dV: {:.3} m/s",
            self.outcome,
            detection,
            self.closest_approach_m,
            self.time_inside_koz_s,
            self.blue_total_dv_mps,
            self.threat_total_dv_mps,
        )
    }
}

/// Score a completed run.
///
/// All needed signals are already embedded as flags in the history; the
/// step duration is inferred from the record spacing.
pub fn score_run(history: &History) -> Score {
    let detection_time_s = history.records.iter().find(|r| r.detected).map(|r| r.t);
    let closest_approach_m = history
        .records
        .iter()
        .map(|r| r.range_m)
        .fold(f64::INFINITY, f64::min);
    let inside_count = history.records.iter().filter(|r| r.inside_koz).count();
    let time_inside_koz_s = inside_count as f64 * history.dt();
    let blue_total_dv_mps: f64 = history.records.iter().map(|r| r.blue_dv_mps).sum();
    let threat_total_dv_mps: f64 = history.records.iter().map(|r| r.threat_dv_mps).sum();

    let outcome = if detection_time_s.is_some() && time_inside_koz_s == 0.0 {
        Outcome::KozMaintained
    } else if time_inside_koz_s > 0.0 && blue_total_dv_mps > 0.0 {
        Outcome::KozViolatedWithDodge
    } else if time_inside_koz_s > 0.0 {
        Outcome::KozViolatedNoDodge
    } else {
        Outcome::NoEncounter
    };

    Score {
        detection_time_s,
        closest_approach_m,
        time_inside_koz_s,
        blue_total_dv_mps,
        threat_total_dv_mps,
        outcome,
    }
}
