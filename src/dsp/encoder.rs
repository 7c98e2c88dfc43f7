//! Binary encoder — fixed-width codes for quantization level indices.

use serde::{Deserialize, Serialize};

use super::quantizer::QuantizedPoint;
use crate::error::PcmError;
use crate::params::PcmParams;

/// One encoded sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedSample {
    /// Position in the quantized sequence.
    pub index: usize,
    pub level: u32,
    /// Zero-padded binary representation of `level`.
    pub code: String,
}

/// Bits per sample as reported to the user: `log2(L)`, possibly fractional.
pub fn bits_per_sample(levels: u32) -> f64 {
    (levels as f64).log2()
}

/// Code width: `max(1, ceil(log2(L)))`, with `log2(L)` taken as 0 for L <= 1.
pub fn code_width(levels: u32) -> usize {
    let bits = if levels > 1 { bits_per_sample(levels) } else { 0.0 };
    (bits.ceil() as usize).max(1)
}

/// Format `level` as a binary string left-padded with zeros to `width`.
///
/// Levels that need more digits than `width` are not truncated.
pub fn encode_level(level: u32, width: usize) -> String {
    format!("{level:0width$b}")
}

/// Parse a binary code back to its level index.
pub fn decode_code(code: &str) -> Result<u32, PcmError> {
    if code.is_empty() || !code.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(PcmError::InvalidCode {
            code: code.to_string(),
        });
    }
    u32::from_str_radix(code, 2).map_err(|_| PcmError::InvalidCode {
        code: code.to_string(),
    })
}

/// Encode every quantized point, index for index.
pub fn encode_signal(quantized: &[QuantizedPoint], params: &PcmParams) -> Vec<EncodedSample> {
    let width = code_width(params.quantization_levels);
    quantized
        .iter()
        .enumerate()
        .map(|(index, p)| EncodedSample {
            index,
            level: p.level,
            code: encode_level(p.level, width),
        })
        .collect()
}
