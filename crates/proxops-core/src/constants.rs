//! Physical constants and numerical guards.

/// Mean equatorial Earth radius (km).
pub const EARTH_RADIUS_KM: f64 = 6378.137;

/// Earth gravitational parameter (km^3/s^2).
pub const MU_EARTH_KM3_S2: f64 = 398_600.4418;

// --- Numerical guards ---

/// Epsilon added to range denominators (closing speed, LOS normalization)
/// so an exact-rest state divides cleanly.
pub const RANGE_EPS: f64 = 1e-9;

/// Range below which the line-of-sight direction is treated as singular
/// and LOS-referenced burns are suppressed (meters).
pub const LOS_MIN_RANGE_M: f64 = 1.0;

/// Cross-product norm below which the dodge basis is considered degenerate
/// (LOS nearly parallel to the reference axis) and the fallback axis is used.
pub const DEGENERATE_CROSS_NORM: f64 = 1e-6;

// --- Front-end input scaling ---

/// Divisor applied to the percent-style delta-v sliders (slider units -> m/s).
pub const DV_SLIDER_SCALE: f64 = 100.0;

/// Divisor applied to the process-noise slider (slider units -> m/s^2).
pub const NOISE_SLIDER_SCALE: f64 = 1000.0;

// --- Unit conversions ---

/// Meters per kilometer.
pub const M_PER_KM: f64 = 1000.0;

/// Seconds per minute.
pub const SECS_PER_MIN: f64 = 60.0;
