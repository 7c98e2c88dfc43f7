//! PCM pipeline stages.
//!
//! Data flows strictly forward: signal → sampler → quantizer → {encoder,
//! reconstructor, analyzer}. Every stage is a pure function of its input
//! and the current [`PcmParams`](crate::params::PcmParams).

pub mod analyzer;
pub mod encoder;
pub mod quantizer;
pub mod reconstructor;
pub mod sampler;
pub mod signal;
