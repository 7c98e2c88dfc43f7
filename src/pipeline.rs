//! Full simulation run — every stage in order, results returned by value.

use serde::{Deserialize, Serialize};

use crate::dsp::analyzer::{analyze, Metrics};
use crate::dsp::encoder::{encode_signal, EncodedSample};
use crate::dsp::quantizer::{quantize_signal, QuantizedSignal};
use crate::dsp::reconstructor::{reconstruct_signal, ZohSignal};
use crate::dsp::sampler::sample_signal;
use crate::dsp::signal::{analog_signal, Point};
use crate::params::PcmParams;

/// Output of one simulation run. A new run replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    pub params: PcmParams,
    pub analog: Vec<Point>,
    pub sampled: Vec<Point>,
    pub quantized: QuantizedSignal,
    pub encoded: Vec<EncodedSample>,
    pub reconstructed: ZohSignal,
    pub metrics: Metrics,
}

impl Simulation {
    /// Reconstructed staircase as plot points.
    pub fn reconstructed_points(&self) -> Vec<Point> {
        self.reconstructed.to_points()
    }
}

/// Run the whole pipeline for `params`.
pub fn simulate(params: &PcmParams) -> Simulation {
    tracing::debug!(
        "Running simulation: A={} f={}Hz phase={}deg T={}s Fs={}Hz L={}",
        params.amplitude,
        params.frequency,
        params.phase,
        params.duration,
        params.sampling_rate,
        params.quantization_levels
    );

    let analog = analog_signal(params);
    let sampled = sample_signal(&analog, params);
    let quantized = quantize_signal(&sampled, params);
    let encoded = encode_signal(&quantized.points, params);
    let reconstructed = reconstruct_signal(&quantized.points, params.duration);
    let metrics = analyze(params, &sampled, quantized.mse);

    tracing::debug!(
        "Simulation complete: {} sampled, {} quantized, mse={:e}",
        sampled.len(),
        quantized.len(),
        quantized.mse
    );

    Simulation {
        params: *params,
        analog,
        sampled,
        quantized,
        encoded,
        reconstructed,
        metrics,
    }
}
