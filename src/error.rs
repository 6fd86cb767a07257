use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures at the JavaScript boundary. Data-quality problems inside valid
/// input never surface here; they degrade to "no data".
#[derive(Debug, Error, PartialEq)]
pub enum MapError {
    #[error("invalid score records: {0}")]
    InvalidRecords(String),
    #[error("invalid feature collection: {0}")]
    InvalidFeatures(String),
    #[error("invalid map config: {0}")]
    InvalidConfig(String),
    #[error("feature index {index} out of range for {len} features")]
    FeatureOutOfRange { index: usize, len: usize },
    #[error("unknown aggregate {0}")]
    UnknownAggregate(String),
}

impl From<MapError> for JsValue {
    fn from(err: MapError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
