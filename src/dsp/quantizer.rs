//! Uniform mid-riser quantizer over the symmetric range [-A, A].
//!
//! The range is split into L equal intervals of width Δ = 2A / L. A sample
//! maps to the index of the interval containing it and is reconstructed at
//! that interval's midpoint.

use serde::{Deserialize, Serialize};

use super::signal::Point;
use crate::params::PcmParams;

/// Smallest range width used when the amplitude is (close to) zero.
pub const MIN_RANGE: f64 = 1e-9;

/// A sampled point after quantization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuantizedPoint {
    pub time: f64,
    /// Midpoint of the chosen interval.
    pub value: f64,
    /// Interval index in [0, L-1].
    pub level: u32,
}

/// Quantizer geometry derived from amplitude and level count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantizerSpec {
    pub min: f64,
    pub max: f64,
    pub levels: u32,
    /// Step size Δ.
    pub step: f64,
}

impl QuantizerSpec {
    /// Returns `None` when `levels == 0`.
    pub fn new(amplitude: f64, levels: u32) -> Option<Self> {
        if levels == 0 {
            return None;
        }
        let min = -amplitude;
        let max = amplitude;
        let range = (max - min).max(MIN_RANGE);
        Some(QuantizerSpec {
            min,
            max,
            levels,
            step: range / levels as f64,
        })
    }

    pub fn from_params(params: &PcmParams) -> Option<Self> {
        Self::new(params.amplitude, params.quantization_levels)
    }

    /// Interval index for `value`, clamped to [0, L-1].
    pub fn level_of(&self, value: f64) -> u32 {
        // max(min, min(max, v)), order matters when A < 0
        let clamped = value.min(self.max).max(self.min);
        let raw = ((clamped - self.min).max(0.0) / self.step).floor();
        let top = (self.levels - 1) as f64;
        raw.max(0.0).min(top) as u32
    }

    /// Reconstruction value (interval midpoint) for a level index.
    pub fn level_value(&self, level: u32) -> f64 {
        self.min + (level as f64 + 0.5) * self.step
    }

    /// All reconstruction values, lowest first.
    pub fn reconstruction_levels(&self) -> Vec<f64> {
        (0..self.levels).map(|i| self.level_value(i)).collect()
    }
}

/// Quantizer output: points plus the aggregate mean-squared error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuantizedSignal {
    pub points: Vec<QuantizedPoint>,
    /// Mean of `(sampled - quantized)^2`, measured against the unclamped
    /// sampled values. 0 when there are no samples.
    pub mse: f64,
    /// Step size Δ (0 when no quantizer could be built).
    pub step: f64,
}

impl QuantizedSignal {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Quantize every sampled point.
pub fn quantize_signal(sampled: &[Point], params: &PcmParams) -> QuantizedSignal {
    let Some(spec) = QuantizerSpec::from_params(params) else {
        tracing::debug!("Quantization skipped: level count is zero");
        return QuantizedSignal::default();
    };

    let mut error_sum_sq = 0.0;
    let points: Vec<QuantizedPoint> = sampled
        .iter()
        .map(|p| {
            let level = spec.level_of(p.value);
            let value = spec.level_value(level);
            let err = p.value - value;
            error_sum_sq += err * err;
            QuantizedPoint {
                time: p.time,
                value,
                level,
            }
        })
        .collect();

    let mse = if sampled.is_empty() {
        0.0
    } else {
        error_sum_sq / sampled.len() as f64
    };

    QuantizedSignal {
        points,
        mse,
        step: spec.step,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(values: &[f64]) -> Vec<Point> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Point::new(i as f64 * 0.1, v))
            .collect()
    }

    #[test]
    fn step_for_default_scenario() {
        let spec = QuantizerSpec::from_params(&PcmParams::default()).unwrap();
        assert_eq!(spec.step, 0.125);
    }

    #[test]
    fn levels_stay_in_range() {
        let params = PcmParams::default().with_quantization_levels(8);
        let q = quantize_signal(&pts(&[-5.0, -1.0, -0.3, 0.0, 0.999, 1.0, 7.0]), &params);
        for p in &q.points {
            assert!(p.level <= 7, "level {} out of range", p.level);
        }
        assert_eq!(q.points[0].level, 0);
        assert_eq!(q.points[1].level, 0);
        // Upper edge maps to the top interval, not L
        assert_eq!(q.points[5].level, 7);
        assert_eq!(q.points[6].level, 7);
    }

    #[test]
    fn midpoint_reconstruction() {
        let params = PcmParams::default().with_quantization_levels(4);
        // Δ = 0.5, intervals [-1,-0.5) [-0.5,0) [0,0.5) [0.5,1]
        let q = quantize_signal(&pts(&[-0.9, -0.2, 0.1, 0.6]), &params);
        let levels: Vec<u32> = q.points.iter().map(|p| p.level).collect();
        let values: Vec<f64> = q.points.iter().map(|p| p.value).collect();
        assert_eq!(levels, vec![0, 1, 2, 3]);
        assert_eq!(values, vec![-0.75, -0.25, 0.25, 0.75]);
    }

    #[test]
    fn mse_uses_unclamped_values() {
        let params = PcmParams::default().with_quantization_levels(2);
        // 3.0 clamps to level 1 (value 0.5); error is measured from 3.0
        let q = quantize_signal(&pts(&[3.0]), &params);
        assert_eq!(q.points[0].value, 0.5);
        assert!((q.mse - 6.25).abs() < 1e-12, "mse {}", q.mse);
    }

    #[test]
    fn mse_is_mean_of_squared_errors() {
        let params = PcmParams::default().with_quantization_levels(4);
        let q = quantize_signal(&pts(&[-0.9, 0.1]), &params);
        // errors: -0.15, -0.15
        assert!((q.mse - 0.0225).abs() < 1e-12, "mse {}", q.mse);
    }

    #[test]
    fn empty_input_zero_mse() {
        let q = quantize_signal(&[], &PcmParams::default());
        assert!(q.is_empty());
        assert_eq!(q.mse, 0.0);
    }

    #[test]
    fn zero_levels_yield_empty() {
        let params = PcmParams::default().with_quantization_levels(0);
        let q = quantize_signal(&pts(&[0.1, 0.2]), &params);
        assert!(q.is_empty());
        assert_eq!(q.mse, 0.0);
    }

    #[test]
    fn zero_amplitude_uses_minimum_range() {
        let params = PcmParams::default().with_amplitude(0.0).with_quantization_levels(4);
        let q = quantize_signal(&pts(&[0.0, 0.5]), &params);
        assert_eq!(q.step, MIN_RANGE / 4.0);
        assert!(q.points.iter().all(|p| p.level == 0));
        assert!(q.points.iter().all(|p| p.value.is_finite()));
    }

    #[test]
    fn single_level_maps_everything_to_zero() {
        let params = PcmParams::default().with_quantization_levels(1);
        let q = quantize_signal(&pts(&[-1.0, 0.0, 1.0]), &params);
        assert!(q.points.iter().all(|p| p.level == 0 && p.value == 0.0));
    }

    #[test]
    fn reconstruction_levels_symmetric() {
        let spec = QuantizerSpec::new(2.0, 8).unwrap();
        let levels = spec.reconstruction_levels();
        assert_eq!(levels.len(), 8);
        for i in 0..4 {
            assert!((levels[i] + levels[7 - i]).abs() < 1e-12);
        }
    }
}
