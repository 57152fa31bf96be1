//! Tests for the encounter loop and scoring engine.

use glam::DVec3;

use proxops_core::config::{mean_motion, ScenarioConfig, ScenarioInput};
use proxops_core::events::EventTag;
use proxops_core::history::{History, StepRecord};
use proxops_core::types::RelativeState;
use proxops_policy::{KeepOutPolicy, LlmHeuristicPolicy, ThreatApproach};

use crate::engine::{run_encounter, run_scenario};
use crate::scoring::{score_run, Outcome};

/// Fast-closing scenario that reaches the keep-out zone well within the run:
/// threat 2 km behind on the along-track axis, closing at 5 m/s.
fn encounter_config() -> ScenarioConfig {
    ScenarioConfig {
        n: mean_motion(700.0),
        initial_state: RelativeState::new(
            DVec3::new(0.0, -2000.0, 0.0),
            DVec3::new(0.0, 5.0, 0.0),
        ),
        steps: 600,
        dt: 1.0,
        detect_radius_m: 1500.0,
        keepout_radius_m: 800.0,
        noise_accel_std: 0.0,
        seed: 42,
    }
}

fn fast_threat() -> ThreatApproach {
    ThreatApproach::new(5.0, 0.5)
}

fn record(t: f64, range_m: f64) -> StepRecord {
    StepRecord {
        t,
        pos: DVec3::new(0.0, range_m, 0.0),
        vel: DVec3::ZERO,
        range_m,
        closing_speed_mps: 0.0,
        detected: false,
        inside_koz: false,
        blue_dv_mps: 0.0,
        threat_dv_mps: 0.0,
    }
}

// ---- Loop shape ----

#[test]
fn test_history_length_is_steps_plus_one() {
    let config = ScenarioConfig::default();
    let mut threat = ThreatApproach::new(0.1, 0.05);
    let mut blue = KeepOutPolicy::new(0.1);
    let history = run_encounter(&config, &mut threat, &mut blue);
    assert_eq!(history.len(), config.steps + 1);
    assert_eq!(history.records[0].t, 0.0);
    assert_eq!(history.records[900].t, 900.0);
}

#[test]
fn test_reference_scenario_is_no_encounter() {
    // The reference scenario closes ~0.1 m/s from 8.6 km out: 15 minutes
    // is nowhere near enough to reach the 2 km detection shell.
    let config = ScenarioConfig::default();
    let mut threat = ThreatApproach::new(0.1, 0.05);
    let mut blue = KeepOutPolicy::new(0.1);
    let history = run_encounter(&config, &mut threat, &mut blue);
    let score = score_run(&history);

    assert_eq!(score.detection_time_s, None);
    assert_eq!(score.time_inside_koz_s, 0.0);
    assert_eq!(score.blue_total_dv_mps, 0.0);
    assert!(score.threat_total_dv_mps > 0.0, "threat burns continuously");
    assert_eq!(score.outcome, Outcome::NoEncounter);
    assert!(history.blue_events.is_empty());
}

// ---- Determinism ----

#[test]
fn test_determinism_zero_noise() {
    let config = ScenarioConfig::default();
    let run = |seed: u64| {
        let mut threat = ThreatApproach::new(0.1, 0.05);
        let mut blue = KeepOutPolicy::new(0.1);
        let history = run_encounter(&ScenarioConfig { seed, ..config.clone() }, &mut threat, &mut blue);
        serde_json::to_string(&history).unwrap()
    };
    // Without noise even the seed is irrelevant: bit-identical histories.
    assert_eq!(run(1), run(2));
}

#[test]
fn test_determinism_same_seed_with_noise() {
    let config = ScenarioConfig {
        noise_accel_std: 0.001,
        seed: 1234,
        ..encounter_config()
    };
    let run = || {
        let mut threat = fast_threat();
        let mut blue = KeepOutPolicy::new(0.1);
        let history = run_encounter(&config, &mut threat, &mut blue);
        serde_json::to_string(&history).unwrap()
    };
    assert_eq!(run(), run(), "histories diverged with same seed");
}

#[test]
fn test_different_seeds_diverge_with_noise() {
    let base = encounter_config();
    let run = |seed: u64| {
        let config = ScenarioConfig {
            noise_accel_std: 0.001,
            seed,
            ..base.clone()
        };
        let mut threat = fast_threat();
        let mut blue = KeepOutPolicy::new(0.1);
        let history = run_encounter(&config, &mut threat, &mut blue);
        serde_json::to_string(&history).unwrap()
    };
    assert_ne!(run(111), run(222), "different seeds should diverge");
}

// ---- Flags ----

#[test]
fn test_detected_flag_is_monotonic() {
    let config = encounter_config();
    let mut threat = fast_threat();
    let mut blue = KeepOutPolicy::new(0.1);
    let history = run_encounter(&config, &mut threat, &mut blue);

    let first = history
        .records
        .iter()
        .position(|r| r.detected)
        .expect("fast scenario must reach the detection shell");
    assert!(history.records[first..].iter().all(|r| r.detected));
    assert!(history.records[..first].iter().all(|r| !r.detected));
}

#[test]
fn test_inside_koz_flag_matches_range() {
    let config = encounter_config();
    let mut threat = fast_threat();
    let mut blue = KeepOutPolicy::new(0.1);
    let history = run_encounter(&config, &mut threat, &mut blue);

    for r in &history.records {
        assert_eq!(r.inside_koz, r.range_m < config.keepout_radius_m);
    }
    assert!(history.records.iter().any(|r| r.inside_koz));
}

#[test]
fn test_detection_precedes_koz_entry() {
    let config = encounter_config();
    let mut threat = fast_threat();
    let mut blue = KeepOutPolicy::new(0.1);
    let history = run_encounter(&config, &mut threat, &mut blue);

    let detect_t = history.records.iter().find(|r| r.detected).map(|r| r.t);
    let entry_t = history.records.iter().find(|r| r.inside_koz).map(|r| r.t);
    assert!(detect_t.unwrap() < entry_t.unwrap());
}

// ---- Dodge behavior through the loop ----

#[test]
fn test_exactly_one_dodge_event() {
    let config = encounter_config();
    let mut threat = fast_threat();
    let mut blue = KeepOutPolicy::new(0.1);
    let history = run_encounter(&config, &mut threat, &mut blue);

    assert_eq!(history.blue_events.len(), 1);
    assert_eq!(history.blue_events[0].tag, EventTag::Dodge);

    // Blue's fuel spend lands on a single step.
    let burn_steps = history.records.iter().filter(|r| r.blue_dv_mps > 0.0).count();
    assert_eq!(burn_steps, 1);

    // The event fired on the first step inside the zone while closing.
    let entry = history
        .records
        .iter()
        .find(|r| r.inside_koz)
        .expect("scenario enters the KOZ");
    assert_eq!(history.blue_events[0].t, entry.t);
}

#[test]
fn test_blue_cumulative_dv_non_decreasing() {
    let config = encounter_config();
    let mut threat = fast_threat();
    let mut blue = KeepOutPolicy::new(0.1);
    let history = run_encounter(&config, &mut threat, &mut blue);

    let mut cumulative = 0.0;
    for r in &history.records {
        assert!(r.blue_dv_mps >= 0.0);
        cumulative += r.blue_dv_mps;
    }
    assert!((cumulative - 0.1).abs() < 1e-9, "one dodge of 0.1 m/s");
}

#[test]
fn test_heuristic_dodge_direction_from_along_track_sign() {
    // Approach from behind: along-track position is negative at the
    // trigger, so the heuristic steers right.
    let config = encounter_config();
    let mut threat = fast_threat();
    let mut blue = LlmHeuristicPolicy::new(0.1);
    let history = run_encounter(&config, &mut threat, &mut blue);

    assert_eq!(history.blue_events.len(), 1);
    assert_eq!(history.blue_events[0].tag, EventTag::AiDodgeRight);
}

#[test]
fn test_encounter_outcome_violated_with_dodge() {
    // The dodge fires only once the threat is already inside the zone,
    // so this scenario always scores as a brief violation with recovery.
    let config = encounter_config();
    let mut threat = fast_threat();
    let mut blue = KeepOutPolicy::new(0.1);
    let history = run_encounter(&config, &mut threat, &mut blue);
    let score = score_run(&history);

    assert!(score.detection_time_s.is_some());
    assert!(score.time_inside_koz_s > 0.0);
    assert!(score.blue_total_dv_mps > 0.0);
    assert!(score.closest_approach_m < config.keepout_radius_m);
    assert_eq!(score.outcome, Outcome::KozViolatedWithDodge);
}

// ---- Scoring on crafted histories ----

#[test]
fn test_scoring_never_detected_history() {
    let mut history = History::default();
    for k in 0..10 {
        history.records.push(record(k as f64, 9000.0));
    }
    let score = score_run(&history);
    assert_eq!(score.detection_time_s, None);
    assert_eq!(score.time_inside_koz_s, 0.0);
    assert_eq!(score.closest_approach_m, 9000.0);
    assert_eq!(score.outcome, Outcome::NoEncounter);
}

#[test]
fn test_scoring_maintained_koz() {
    let mut history = History::default();
    for k in 0..10 {
        let mut r = record(k as f64, 1800.0);
        r.detected = k >= 3;
        history.records.push(r);
    }
    let score = score_run(&history);
    assert_eq!(score.detection_time_s, Some(3.0));
    assert_eq!(score.outcome, Outcome::KozMaintained);
}

#[test]
fn test_scoring_violation_without_dodge() {
    let mut history = History::default();
    for k in 0..10 {
        let mut r = record(k as f64, 900.0);
        r.detected = true;
        r.inside_koz = k >= 5;
        history.records.push(r);
    }
    let score = score_run(&history);
    // 5 records inside at 1 s spacing.
    assert_eq!(score.time_inside_koz_s, 5.0);
    assert_eq!(score.blue_total_dv_mps, 0.0);
    assert_eq!(score.outcome, Outcome::KozViolatedNoDodge);
}

#[test]
fn test_scoring_violation_with_dodge_precedence() {
    // Dodge precedence beats the no-dodge label even when detected.
    let mut history = History::default();
    for k in 0..4 {
        let mut r = record(k as f64, 700.0);
        r.detected = true;
        r.inside_koz = true;
        r.blue_dv_mps = if k == 1 { 0.1 } else { 0.0 };
        history.records.push(r);
    }
    let score = score_run(&history);
    assert_eq!(score.outcome, Outcome::KozViolatedWithDodge);
}

// ---- Summary formatting ----

#[test]
fn test_score_summary_precision() {
    let mut history = History::default();
    for k in 0..10 {
        let mut r = record(k as f64 * 0.5, 1234.56);
        r.detected = k >= 2;
        r.threat_dv_mps = 0.0123;
        history.records.push(r);
    }
    let score = score_run(&history);
    let line = score.summary();
    assert!(line.contains("Detection: 1.0 s"), "{line}");
    assert!(line.contains("closest approach: 1234.6 m"), "{line}");
    assert!(line.contains("time inside KOZ: 0.0 s"), "{line}");
    assert!(line.contains("Blue dV: 0.000 m/s"), "{line}");
    assert!(line.contains("Threat dV: 0.123 m/s"), "{line}");
}

#[test]
fn test_score_summary_never_detected() {
    let score = score_run(&History::default());
    assert!(score.summary().contains("Detection: never"));
}

// ---- Front-end entry point ----

#[test]
fn test_run_scenario_from_raw_input() {
    let input = ScenarioInput {
        altitude_km: 700.0,
        initial_pos_m: [0.0, -2000.0, 0.0],
        initial_vel_mps: [0.0, 5.0, 0.0],
        duration_min: 10.0,
        dt_s: 1.0,
        detect_radius_km: 1.5,
        keepout_radius_km: 0.8,
        // Sliders are hundredths of m/s: desired closing 5.0, limit 0.5.
        desired_closing_slider: 500.0,
        threat_burn_slider: 50.0,
        dodge_slider: 10.0,
        ai_defender: true,
        noise_slider: 0.0,
        seed: 42,
    };
    let (history, score) = run_scenario(&input);

    assert_eq!(history.len(), 601);
    assert_eq!(history.blue_events.len(), 1);
    assert_eq!(history.blue_events[0].tag, EventTag::AiDodgeRight);
    assert_eq!(score.outcome, Outcome::KozViolatedWithDodge);
}
