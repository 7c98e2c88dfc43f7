//! Simulation parameters.
//!
//! A `PcmParams` value is passed into every pipeline stage. Stages never
//! store or mutate it; changing a parameter means building a new value and
//! re-running the pipeline. Keys serialize in camelCase to match the
//! presentation layer's settings object.

use serde::{Deserialize, Serialize};

use crate::error::PcmError;

// ── Defaults ────────────────────────────────────────────────

pub const DEFAULT_AMPLITUDE: f64 = 1.0;
pub const DEFAULT_FREQUENCY: f64 = 2.0;
pub const DEFAULT_PHASE: f64 = 0.0;
pub const DEFAULT_DURATION: f64 = 1.0;
pub const DEFAULT_SAMPLING_RATE: f64 = 20.0;
pub const DEFAULT_QUANTIZATION_LEVELS: u32 = 16;

/// The full parameter set of one simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PcmParams {
    /// Peak amplitude A. Also defines the quantizer range [-A, A].
    pub amplitude: f64,
    /// Signal frequency in Hz.
    pub frequency: f64,
    /// Phase offset in degrees.
    pub phase: f64,
    /// Signal duration in seconds.
    pub duration: f64,
    /// Sampling rate Fs in Hz. Fs <= 0 yields no samples.
    pub sampling_rate: f64,
    /// Number of quantization levels L. L = 0 yields no quantized output.
    pub quantization_levels: u32,
}

impl Default for PcmParams {
    fn default() -> Self {
        PcmParams {
            amplitude: DEFAULT_AMPLITUDE,
            frequency: DEFAULT_FREQUENCY,
            phase: DEFAULT_PHASE,
            duration: DEFAULT_DURATION,
            sampling_rate: DEFAULT_SAMPLING_RATE,
            quantization_levels: DEFAULT_QUANTIZATION_LEVELS,
        }
    }
}

impl PcmParams {
    /// Parse a JSON settings object. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, PcmError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, PcmError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_amplitude(self, amplitude: f64) -> Self {
        PcmParams { amplitude, ..self }
    }

    pub fn with_frequency(self, frequency: f64) -> Self {
        PcmParams { frequency, ..self }
    }

    pub fn with_phase(self, phase: f64) -> Self {
        PcmParams { phase, ..self }
    }

    pub fn with_duration(self, duration: f64) -> Self {
        PcmParams { duration, ..self }
    }

    pub fn with_sampling_rate(self, sampling_rate: f64) -> Self {
        PcmParams {
            sampling_rate,
            ..self
        }
    }

    pub fn with_quantization_levels(self, quantization_levels: u32) -> Self {
        PcmParams {
            quantization_levels,
            ..self
        }
    }

    /// Strict validation for callers that prefer a fault over degenerate
    /// output. The pipeline itself does not call this.
    pub fn validate(&self) -> Result<(), PcmError> {
        let finite = [
            ("amplitude", self.amplitude),
            ("frequency", self.frequency),
            ("phase", self.phase),
            ("duration", self.duration),
            ("samplingRate", self.sampling_rate),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(PcmError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }
        if self.duration <= 0.0 {
            return Err(PcmError::InvalidParameter {
                name: "duration",
                value: self.duration,
                reason: "must be greater than zero",
            });
        }
        if self.sampling_rate <= 0.0 {
            return Err(PcmError::InvalidParameter {
                name: "samplingRate",
                value: self.sampling_rate,
                reason: "must be greater than zero",
            });
        }
        if self.quantization_levels == 0 {
            return Err(PcmError::InvalidParameter {
                name: "quantizationLevels",
                value: 0.0,
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_simulator_reset_values() {
        let p = PcmParams::default();
        assert_eq!(p.amplitude, 1.0);
        assert_eq!(p.frequency, 2.0);
        assert_eq!(p.phase, 0.0);
        assert_eq!(p.duration, 1.0);
        assert_eq!(p.sampling_rate, 20.0);
        assert_eq!(p.quantization_levels, 16);
    }

    #[test]
    fn parse_camel_case_keys() {
        let p = PcmParams::from_json(r#"{"samplingRate": 44.5, "quantizationLevels": 8}"#)
            .expect("parse failed");
        assert_eq!(p.sampling_rate, 44.5);
        assert_eq!(p.quantization_levels, 8);
        // Unspecified keys fall back to defaults
        assert_eq!(p.amplitude, DEFAULT_AMPLITUDE);
        assert_eq!(p.duration, DEFAULT_DURATION);
    }

    #[test]
    fn parse_rejects_negative_levels() {
        let err = PcmParams::from_json(r#"{"quantizationLevels": -4}"#).unwrap_err();
        assert!(matches!(err, PcmError::Config(_)), "got {err:?}");
    }

    #[test]
    fn json_round_trip() {
        let p = PcmParams::default().with_phase(45.0).with_amplitude(2.5);
        let json = p.to_json().unwrap();
        assert!(json.contains("\"quantizationLevels\":16"), "{json}");
        assert_eq!(PcmParams::from_json(&json).unwrap(), p);
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(PcmParams::default().validate().is_ok());
    }

    #[test]
    fn validate_flags_degenerate_values() {
        let zero_rate = PcmParams::default().with_sampling_rate(0.0);
        assert!(matches!(
            zero_rate.validate(),
            Err(PcmError::InvalidParameter { name: "samplingRate", .. })
        ));

        let no_levels = PcmParams::default().with_quantization_levels(0);
        assert!(matches!(
            no_levels.validate(),
            Err(PcmError::InvalidParameter { name: "quantizationLevels", .. })
        ));

        let nan_freq = PcmParams::default().with_frequency(f64::NAN);
        assert!(matches!(
            nan_freq.validate(),
            Err(PcmError::InvalidParameter { name: "frequency", .. })
        ));
    }
}
