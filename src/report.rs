//! Text report — the encoded-data table and the metric info lines shown
//! next to the charts.

use crate::dsp::analyzer::Metrics;
use crate::dsp::encoder::{code_width, EncodedSample};

pub const NO_DATA: &str = "--- No data ---";

/// Encoded-data table split into its header block and its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTable {
    /// Column header plus a dashed separator line; empty when there is no data.
    pub header: String,
    pub body: String,
}

impl BinaryTable {
    pub fn render(&self) -> String {
        if self.header.is_empty() {
            self.body.clone()
        } else {
            format!("{}\n{}", self.header, self.body)
        }
    }
}

/// Lay out `Sample | Level | Binary Code (N bits)` with each column as
/// wide as its widest cell.
pub fn binary_table(encoded: &[EncodedSample], levels: u32) -> BinaryTable {
    if encoded.is_empty() {
        return BinaryTable {
            header: String::new(),
            body: NO_DATA.to_string(),
        };
    }

    let code_title = format!("Binary Code ({} bits)", code_width(levels));

    let mut sample_w = "Sample".len();
    let mut level_w = "Level".len();
    let mut code_w = code_title.len();
    for e in encoded {
        sample_w = sample_w.max(e.index.to_string().len());
        level_w = level_w.max(e.level.to_string().len());
        code_w = code_w.max(e.code.len());
    }
    let col1 = sample_w + 1;
    let col2 = level_w + 1;

    let title = format!(
        "{:<col1$}| {:<col2$}| {:<code_w$}",
        "Sample", "Level", code_title
    );
    let header = format!("{title}\n{}", "-".repeat(title.len()));

    let body = encoded
        .iter()
        .map(|e| {
            format!(
                "{:<col1$}| {:<col2$}| {:<code_w$}",
                e.index, e.level, e.code
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    BinaryTable { header, body }
}

pub fn nyquist_line(metrics: &Metrics) -> String {
    format!("Nyquist Rate: {} Hz", metrics.nyquist.rate)
}

/// Aliasing warning, present only when the sampling rate is too low.
pub fn aliasing_warning(metrics: &Metrics) -> Option<&'static str> {
    metrics
        .nyquist
        .aliasing
        .then_some("Warning: sampling rate below Nyquist rate, aliasing will occur")
}

/// Spelling of non-finite numbers on the display side.
fn non_finite_text(x: f64) -> Option<&'static str> {
    if x.is_nan() {
        Some("NaN")
    } else if x == f64::INFINITY {
        Some("Infinity")
    } else if x == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// Plain number text; non-finite values use the display side's spelling.
pub fn format_number(x: f64) -> String {
    match non_finite_text(x) {
        Some(text) => text.to_string(),
        None => x.to_string(),
    }
}

/// Exponential notation with `digits` fraction digits and an always-signed
/// exponent: `1.250e+1`, `0.000e+0`, `1.234e-3`.
pub fn format_exponential(x: f64, digits: usize) -> String {
    if let Some(text) = non_finite_text(x) {
        return text.to_string();
    }
    let formatted = format!("{x:.digits$e}");
    match formatted.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => formatted,
    }
}

pub fn bits_line(metrics: &Metrics) -> String {
    format!("Bits per sample: {}", format_number(metrics.bits_per_sample))
}

pub fn mse_line(metrics: &Metrics) -> String {
    format!(
        "Quantization Error (Approx. MSE): {}",
        format_exponential(metrics.mse, 3)
    )
}

pub fn snr_line(metrics: &Metrics) -> String {
    match metrics.estimated_snr_db {
        Some(snr) => format!("Estimated SNR (Quantization): {snr:.2} dB"),
        None => "Estimated SNR (Quantization): N/A".to_string(),
    }
}

pub fn measured_sqnr_line(metrics: &Metrics) -> String {
    match metrics.measured_sqnr_db {
        Some(sqnr) => format!("Measured SQNR: {sqnr:.2} dB"),
        None => "Measured SQNR: N/A".to_string(),
    }
}

/// All info lines in display order.
pub fn summary(metrics: &Metrics) -> Vec<String> {
    let mut lines = vec![nyquist_line(metrics)];
    if let Some(warning) = aliasing_warning(metrics) {
        lines.push(warning.to_string());
    }
    lines.push(bits_line(metrics));
    lines.push(mse_line(metrics));
    lines.push(snr_line(metrics));
    lines.push(measured_sqnr_line(metrics));
    lines
}
