use serde::{Deserialize, Serialize};

/// Discrete color band of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    NoData,
    Low,
    Medium,
    High,
}

impl ScoreBand {
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::NoData => "No data",
            ScoreBand::Low => "Low",
            ScoreBand::Medium => "Medium",
            ScoreBand::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cursor {
    Pointer,
    Default,
}

/// Paint for the default, hovered and pressed states of one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureStyle {
    pub default_fill: String,
    pub hover_fill: String,
    pub pressed_fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    pub cursor: Cursor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub band: ScoreBand,
    pub label: String,
    pub color: String,
}
