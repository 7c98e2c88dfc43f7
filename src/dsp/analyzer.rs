//! Analysis metrics — Nyquist check and SNR figures.
//!
//! Two SNR values are reported side by side: the textbook estimate
//! `6.02·bits + 1.76 dB` derived from the level count alone, and the SQNR
//! measured from the actual sampled signal and quantization MSE.

use serde::{Deserialize, Serialize};

use super::encoder::bits_per_sample;
use super::signal::Point;
use crate::params::PcmParams;

/// Nyquist rate and aliasing flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NyquistInfo {
    /// Minimum alias-free sampling rate, 2·f.
    pub rate: f64,
    /// True when the sampling rate is strictly below `rate`.
    pub aliasing: bool,
}

pub fn nyquist_info(params: &PcmParams) -> NyquistInfo {
    let rate = 2.0 * params.frequency;
    NyquistInfo {
        rate,
        aliasing: params.sampling_rate < rate,
    }
}

/// Estimated quantization SNR in dB for a full-scale sine.
///
/// `None` (not applicable) for fewer than two levels.
pub fn estimated_snr(params: &PcmParams) -> Option<f64> {
    let levels = params.quantization_levels;
    if levels <= 1 {
        return None;
    }
    Some(6.02 * bits_per_sample(levels) + 1.76)
}

/// Measured SQNR in dB: mean sampled power over the quantization MSE.
///
/// `None` when there are no samples, the signal has no power, or the MSE
/// is zero.
pub fn measured_sqnr(sampled: &[Point], mse: f64) -> Option<f64> {
    if sampled.is_empty() || mse.is_nan() || mse <= 0.0 {
        return None;
    }
    let power = sampled.iter().map(|p| p.value * p.value).sum::<f64>() / sampled.len() as f64;
    if power.is_nan() || power <= 0.0 {
        return None;
    }
    Some(10.0 * (power / mse).log10())
}

/// All scalar metrics of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub nyquist: NyquistInfo,
    /// `log2(L)`, may be fractional.
    pub bits_per_sample: f64,
    pub mse: f64,
    pub estimated_snr_db: Option<f64>,
    pub measured_sqnr_db: Option<f64>,
}

pub fn analyze(params: &PcmParams, sampled: &[Point], mse: f64) -> Metrics {
    Metrics {
        nyquist: nyquist_info(params),
        bits_per_sample: bits_per_sample(params.quantization_levels),
        mse,
        estimated_snr_db: estimated_snr(params),
        measured_sqnr_db: measured_sqnr(sampled, mse),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nyquist_default_scenario() {
        let info = nyquist_info(&PcmParams::default());
        assert_eq!(info.rate, 4.0);
        assert!(!info.aliasing);
    }

    #[test]
    fn aliasing_is_strict() {
        let at_rate = PcmParams::default().with_frequency(10.0).with_sampling_rate(20.0);
        assert!(!nyquist_info(&at_rate).aliasing);

        let below = at_rate.with_sampling_rate(19.9);
        assert!(nyquist_info(&below).aliasing);
    }

    #[test]
    fn snr_for_16_levels() {
        let snr = estimated_snr(&PcmParams::default()).unwrap();
        assert!((snr - 25.84).abs() < 1e-9, "got {snr}");
    }

    #[test]
    fn snr_not_applicable_below_two_levels() {
        assert_eq!(estimated_snr(&PcmParams::default().with_quantization_levels(1)), None);
        assert_eq!(estimated_snr(&PcmParams::default().with_quantization_levels(0)), None);
    }

    #[test]
    fn snr_ignores_measured_error() {
        // Same level count, different amplitude: same estimate
        let a = estimated_snr(&PcmParams::default().with_amplitude(0.01));
        let b = estimated_snr(&PcmParams::default().with_amplitude(100.0));
        assert_eq!(a, b);
    }

    #[test]
    fn measured_sqnr_from_power_and_mse() {
        let sampled = vec![Point::new(0.0, 1.0), Point::new(0.1, -1.0)];
        let sqnr = measured_sqnr(&sampled, 0.01).unwrap();
        assert!((sqnr - 20.0).abs() < 1e-9, "got {sqnr}");
    }

    #[test]
    fn measured_sqnr_undefined_cases() {
        assert_eq!(measured_sqnr(&[], 0.1), None);
        assert_eq!(measured_sqnr(&[Point::new(0.0, 1.0)], 0.0), None);
        assert_eq!(measured_sqnr(&[Point::new(0.0, 0.0)], 0.1), None);
    }
}
