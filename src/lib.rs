pub mod dsp;
pub mod error;
pub mod params;
pub mod pipeline;
pub mod report;

pub use crate::error::PcmError;
pub use crate::params::PcmParams;
pub use crate::pipeline::{simulate, Simulation};

use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the pcm-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

fn params_from_js(params: JsValue) -> Result<PcmParams, JsValue> {
    serde_wasm_bindgen::from_value(params).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: the reset settings as a JS object.
#[wasm_bindgen]
pub fn default_params() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&PcmParams::default())
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: run the whole pipeline for a settings object and return
/// every stage output plus the metrics.
#[wasm_bindgen]
pub fn run_simulation(params: JsValue) -> Result<JsValue, JsValue> {
    let params = params_from_js(params)?;
    let simulation = simulate(&params);
    serde_wasm_bindgen::to_value(&simulation).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: the encoded-data table as preformatted text.
#[wasm_bindgen]
pub fn binary_table(params: JsValue) -> Result<String, JsValue> {
    let params = params_from_js(params)?;
    let simulation = simulate(&params);
    Ok(report::binary_table(&simulation.encoded, params.quantization_levels).render())
}
