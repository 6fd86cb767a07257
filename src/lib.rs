//! Resolves world-map shapes to country AI readiness records and colors them
//! for a choropleth. Built as a WebAssembly module for the dashboard page;
//! everything outside `service` is plain Rust and usable natively.

use wasm_bindgen::prelude::*;

pub mod constants;
pub mod data;
pub mod dependency;
pub mod error;
pub mod logic;
pub mod service;
pub mod types;

pub use data::Aggregate;
pub use error::MapError;
pub use logic::{
    feature_identifier, normalize, render_features, AggregateResolver, CodeKind,
    CountryScoreIndex, InteractionController, MapLogic, Navigator,
};
pub use service::ChoroplethMap;
pub use types::{
    CountryScoreRecord, GeographicFeature, HoverState, MapConfig, RenderedFeature,
    ResolvedFeatureBinding, ScoreBand, ScoreMetric,
};

/// Routes `log` output to the browser console. `debug` enables hover and
/// click tracing for maps configured with `debug: true`.
#[wasm_bindgen]
pub fn init_logging(debug: bool) {
    dependency::console_logger::install(debug);
}

/// Fill color for a score, for legends drawn outside the map.
#[wasm_bindgen]
pub fn color_for_score(score: Option<f64>) -> String {
    logic::color_for(score).to_string()
}

/// Canonical 2-letter code for any 2-letter, 3-letter or numeric code.
#[wasm_bindgen]
pub fn canonical_code(code: &str) -> Option<String> {
    logic::normalize_any(code)
}
