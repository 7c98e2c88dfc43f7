//! Sampler — resamples the analog sequence at the target rate.
//!
//! Sample instants are `k / Fs` for k = 0, 1, 2, ... up to the duration T,
//! with the last instant clamped to T. Each value is linearly interpolated
//! between the first pair of adjacent analog points whose time range
//! contains the instant.

use super::signal::Point;
use crate::params::PcmParams;

/// Time tolerance for end-of-signal clamping and duplicate suppression.
pub const TIME_EPSILON: f64 = 1e-9;

/// Monotonic cursor over the analog sequence.
///
/// Sample instants never decrease, so the first bracketing pair for an
/// instant can never lie before the pair found for the previous one. The
/// walk therefore resumes where it stopped and keeps first-match semantics.
struct Interpolator<'a> {
    analog: &'a [Point],
    cursor: usize,
}

impl<'a> Interpolator<'a> {
    fn new(analog: &'a [Point]) -> Self {
        Interpolator { analog, cursor: 0 }
    }

    /// First `j >= cursor` with `analog[j].time <= t <= analog[j + 1].time`.
    fn locate(&mut self, t: f64) -> Option<usize> {
        let n = self.analog.len();
        while self.cursor + 1 < n {
            let j = self.cursor;
            if self.analog[j].time <= t && self.analog[j + 1].time >= t {
                return Some(j);
            }
            self.cursor += 1;
        }
        None
    }

    fn value_at(&mut self, t: f64) -> f64 {
        match self.locate(t) {
            Some(j) => {
                let p1 = self.analog[j];
                let p2 = self.analog[j + 1];
                if (p1.time - p2.time).abs() < TIME_EPSILON {
                    p1.value
                } else {
                    let slope = (p2.value - p1.value) / (p2.time - p1.time);
                    p1.value + slope * (t - p1.time)
                }
            }
            // Outside the analog range: hold the last known value
            None => self.analog.last().map_or(0.0, |p| p.value),
        }
    }
}

/// Sample `analog` at `params.sampling_rate` over `params.duration`.
///
/// `analog` must have non-decreasing times, as [`analog_signal`] produces.
/// The bracketing search only moves forward, so for out-of-order input it
/// may miss an earlier bracketing pair and hold the last analog value.
///
/// Returns an empty sequence for a non-positive or non-finite sampling rate,
/// and for a non-finite duration. Candidate instants within
/// [`TIME_EPSILON`] of the previously accepted one are dropped.
///
/// [`analog_signal`]: super::signal::analog_signal
pub fn sample_signal(analog: &[Point], params: &PcmParams) -> Vec<Point> {
    let fs = params.sampling_rate;
    let duration = params.duration;
    if !fs.is_finite() || fs <= 0.0 {
        tracing::debug!("Sampling skipped: sampling rate {} is not positive", fs);
        return Vec::new();
    }
    if !duration.is_finite() {
        tracing::debug!("Sampling skipped: duration {} is not finite", duration);
        return Vec::new();
    }

    let ts = 1.0 / fs;
    let mut interp = Interpolator::new(analog);
    let mut sampled = Vec::new();
    let mut last_time = f64::NEG_INFINITY;

    let mut k: u64 = 0;
    loop {
        let t = k as f64 * ts;
        if t > duration + TIME_EPSILON {
            break;
        }
        let exact = t.min(duration);
        let value = interp.value_at(exact);

        if (exact - last_time).abs() > TIME_EPSILON {
            sampled.push(Point::new(exact, value));
            last_time = exact;
        }
        k += 1;
    }

    sampled
}

/// Number of samples expected for a duration and rate: `floor(T * Fs) + 1`.
pub fn expected_sample_count(duration: f64, sampling_rate: f64) -> usize {
    if !sampling_rate.is_finite() || sampling_rate <= 0.0 || duration.is_nan() || duration < 0.0 {
        return 0;
    }
    (duration * sampling_rate + TIME_EPSILON).floor() as usize + 1
}
