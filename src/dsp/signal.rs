//! Analog signal model — a densely sampled sine used as the "continuous" input.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::params::PcmParams;

/// Number of points used to approximate the continuous-time signal.
pub const ANALOG_POINTS: usize = 500;

/// A (time, value) pair. Used for analog, sampled and rendered sequences.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Time in seconds.
    pub time: f64,
    pub value: f64,
}

impl Point {
    pub fn new(time: f64, value: f64) -> Self {
        Point { time, value }
    }
}

/// Value of `A * sin(2πft + φ)` with φ given in degrees.
pub fn sine_value(amplitude: f64, frequency: f64, phase_deg: f64, t: f64) -> f64 {
    let phase_rad = phase_deg * (PI / 180.0);
    amplitude * (2.0 * PI * frequency * t + phase_rad).sin()
}

/// Generate exactly [`ANALOG_POINTS`] uniformly spaced points over
/// `[0, duration]`, `dt = duration / 499`.
///
/// A non-positive or non-finite duration is not rejected; it produces a
/// degenerate (collapsed or reversed) time axis and is the caller's concern.
pub fn analog_signal(params: &PcmParams) -> Vec<Point> {
    let dt = params.duration / (ANALOG_POINTS - 1) as f64;

    (0..ANALOG_POINTS)
        .map(|i| {
            let t = i as f64 * dt;
            Point::new(
                t,
                sine_value(params.amplitude, params.frequency, params.phase, t),
            )
        })
        .collect()
}
