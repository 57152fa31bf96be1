//! Scenario configuration for a single encounter run.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::RelativeState;

/// Mean motion of a circular orbit at the given altitude (rad/s).
pub fn mean_motion(altitude_km: f64) -> f64 {
    let a_km = EARTH_RADIUS_KM + altitude_km;
    (MU_EARTH_KM3_S2 / (a_km * a_km * a_km)).sqrt()
}

/// Immutable inputs for one run. Read-only while the loop executes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Mean motion of Blue's circular reference orbit (rad/s).
    pub n: f64,
    /// Initial relative state of the threat with respect to Blue.
    pub initial_state: RelativeState,
    /// Number of integration steps. The history holds `steps + 1` records.
    pub steps: usize,
    /// Step duration (s).
    pub dt: f64,
    /// Detection radius (m).
    pub detect_radius_m: f64,
    /// Keep-out radius (m).
    pub keepout_radius_m: f64,
    /// Process-noise acceleration 1-sigma (m/s^2). Zero disables noise
    /// and makes the run fully deterministic.
    pub noise_accel_std: f64,
    /// RNG seed for the process-noise stream. Same seed = same run.
    pub seed: u64,
}

impl Default for ScenarioConfig {
    /// Reference scenario: threat parked 8.6 km out, drifting slowly
    /// retrograde, 15 minutes at 1 s steps.
    fn default() -> Self {
        Self {
            n: mean_motion(700.0),
            initial_state: RelativeState::new(
                DVec3::new(3000.0, -8000.0, 500.0),
                DVec3::new(0.0, -0.02, 0.0),
            ),
            steps: 900,
            dt: 1.0,
            detect_radius_m: 2000.0,
            keepout_radius_m: 1000.0,
            noise_accel_std: 0.0,
            seed: 42,
        }
    }
}

/// Parameters for constructing the two maneuver policies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyParams {
    /// Closing speed the threat tries to hold (m/s).
    pub desired_closing_mps: f64,
    /// Threat burn magnitude limit, as delta-v per second (m/s).
    pub burn_rate_limit_mps: f64,
    /// Defender dodge delta-v (m/s).
    pub dodge_dv_mps: f64,
    /// Select the heuristic (directional) defender instead of the basic one.
    pub ai_defender: bool,
}

impl Default for PolicyParams {
    fn default() -> Self {
        Self {
            desired_closing_mps: 0.1,
            burn_rate_limit_mps: 0.05,
            dodge_dv_mps: 0.1,
            ai_defender: false,
        }
    }
}

/// Raw scenario scalars as supplied by the front end.
///
/// Slider-style fields keep the front end's integer scaling conventions
/// (delta-v sliders are hundredths of m/s, the noise slider is thousandths
/// of m/s^2); [`ScenarioInput::build`] converts everything to SI units and
/// derives the mean motion and step count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioInput {
    /// Blue circular orbit altitude (km).
    pub altitude_km: f64,
    /// Initial relative position `[x, y, z]` (m).
    pub initial_pos_m: [f64; 3],
    /// Initial relative velocity `[vx, vy, vz]` (m/s).
    pub initial_vel_mps: [f64; 3],
    /// Run duration (minutes).
    pub duration_min: f64,
    /// Step size (s).
    pub dt_s: f64,
    /// Detection radius (km).
    pub detect_radius_km: f64,
    /// Keep-out radius (km).
    pub keepout_radius_km: f64,
    /// Threat desired closing speed slider (hundredths of m/s).
    pub desired_closing_slider: f64,
    /// Threat burn-rate limit slider (hundredths of m/s).
    pub threat_burn_slider: f64,
    /// Defender dodge delta-v slider (hundredths of m/s).
    pub dodge_slider: f64,
    /// Use the heuristic defender variant.
    pub ai_defender: bool,
    /// Process-noise slider (thousandths of m/s^2).
    pub noise_slider: f64,
    /// Seed for the process-noise stream.
    pub seed: u64,
}

impl ScenarioInput {
    /// Convert to an SI-unit run configuration plus policy parameters.
    pub fn build(&self) -> (ScenarioConfig, PolicyParams) {
        let config = ScenarioConfig {
            n: mean_motion(self.altitude_km),
            initial_state: RelativeState::from_components([
                self.initial_pos_m[0],
                self.initial_pos_m[1],
                self.initial_pos_m[2],
                self.initial_vel_mps[0],
                self.initial_vel_mps[1],
                self.initial_vel_mps[2],
            ]),
            steps: (self.duration_min * SECS_PER_MIN / self.dt_s) as usize,
            dt: self.dt_s,
            detect_radius_m: self.detect_radius_km * M_PER_KM,
            keepout_radius_m: self.keepout_radius_km * M_PER_KM,
            noise_accel_std: self.noise_slider / NOISE_SLIDER_SCALE,
            seed: self.seed,
        };
        let params = PolicyParams {
            desired_closing_mps: self.desired_closing_slider / DV_SLIDER_SCALE,
            burn_rate_limit_mps: self.threat_burn_slider / DV_SLIDER_SCALE,
            dodge_dv_mps: self.dodge_slider / DV_SLIDER_SCALE,
            ai_defender: self.ai_defender,
        };
        (config, params)
    }
}
