//! Fixed-step encounter loop.

use glam::DVec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use proxops_core::config::{ScenarioConfig, ScenarioInput};
use proxops_core::events::ManeuverEvent;
use proxops_core::history::{History, StepRecord};
use proxops_policy::{defender_for, threat_for, DefenderPolicy, ThreatPolicy};

use crate::dynamics::cw_derivatives;
use crate::scoring::{score_run, Score};

/// Run one encounter to completion and return the full history.
///
/// One record per step index including step 0, so the history holds
/// `steps + 1` records. Process noise is drawn from a ChaCha8 generator
/// seeded from the config; with the noise std at zero the run is a pure
/// function of the configuration.
pub fn run_encounter(
    config: &ScenarioConfig,
    threat: &mut dyn ThreatPolicy,
    defender: &mut dyn DefenderPolicy,
) -> History {
    let mut history = History::with_capacity(config.steps + 1);
    let mut state = config.initial_state;
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    // Normal::new rejects a non-positive sigma, so noise is gated on it.
    let noise = (config.noise_accel_std > 0.0)
        .then(|| Normal::new(0.0, config.noise_accel_std).ok())
        .flatten();

    threat.reset();
    defender.reset();
    let mut detected = false;

    for k in 0..=config.steps {
        let t = k as f64 * config.dt;
        let range_m = state.range();
        let closing_mps = state.closing_speed();

        if !detected && range_m <= config.detect_radius_m {
            detected = true;
            defender.on_detect(t, &state);
        }

        // Both sides observe the same pre-step state; neither sees the
        // other's output within a step.
        let a_threat = threat.command(t, &state, config.n, range_m, closing_mps);
        let (a_blue, blue_event) = defender.command(
            t,
            &state,
            config.n,
            range_m,
            closing_mps,
            config.keepout_radius_m,
        );

        if let Some(tag) = blue_event {
            history.blue_events.push(ManeuverEvent { t, tag });
        }

        // Superposition in the linear model: Blue's burn acts on the
        // relative state with the opposite sign of the threat's.
        let mut a_net = a_threat - a_blue;
        if let Some(dist) = &noise {
            a_net += DVec3::new(
                dist.sample(&mut rng),
                dist.sample(&mut rng),
                dist.sample(&mut rng),
            );
        }

        // Semi-implicit Euler: velocity first, then position with the
        // updated velocity. Plain explicit Euler drifts on the stiff
        // oscillatory terms.
        let deriv = cw_derivatives(config.n, &state, a_net);
        state.vel += deriv.acc * config.dt;
        state.pos += state.vel * config.dt;

        history.records.push(StepRecord {
            t,
            pos: state.pos,
            vel: state.vel,
            range_m,
            closing_speed_mps: closing_mps,
            detected,
            inside_koz: range_m < config.keepout_radius_m,
            blue_dv_mps: defender.dv_rate_last() * config.dt,
            threat_dv_mps: threat.dv_rate_last() * config.dt,
        });
    }

    history
}

/// Front-end entry point: build the configuration and policies from the
/// raw scenario scalars, run the encounter, and score it.
pub fn run_scenario(input: &ScenarioInput) -> (History, Score) {
    let (config, params) = input.build();
    let mut threat = threat_for(&params);
    let mut defender = defender_for(&params);
    let history = run_encounter(&config, &mut threat, defender.as_mut());
    let score = score_run(&history);
    (history, score)
}
