use serde::{Deserialize, Serialize};

use super::record::CountryScoreRecord;
use super::style::{FeatureStyle, ScoreBand};

/// Association between one map shape and at most one score record for a
/// single render pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResolvedFeatureBinding {
    /// Normalized identifier of the shape itself, used for coloring.
    pub canonical_id: Option<String>,
    /// The feature id as supplied, before normalization.
    #[serde(default)]
    pub raw_id: Option<String>,
    /// Where a click navigates; the aggregate id for aggregate members.
    pub click_target: Option<String>,
    pub display_name: String,
    pub record: Option<CountryScoreRecord>,
    /// Set when the record was supplied through an aggregate.
    pub aggregate_id: Option<String>,
}

impl ResolvedFeatureBinding {
    pub fn has_record(&self) -> bool {
        self.record.is_some()
    }

    pub fn is_aggregate_member(&self) -> bool {
        self.aggregate_id.is_some()
    }
}

/// What the tooltip overlay shows for a feature.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TooltipPayload {
    pub title: String,
    pub score: Option<f64>,
    pub score_label: String,
}

/// Output of the per-feature render callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedFeature {
    pub index: usize,
    pub binding: ResolvedFeatureBinding,
    pub band: ScoreBand,
    pub fill: String,
    pub style: FeatureStyle,
    pub clickable: bool,
    pub tooltip: TooltipPayload,
}

/// The single hovered feature of a map instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    pub feature_index: usize,
    pub binding: ResolvedFeatureBinding,
    pub tooltip: TooltipPayload,
    pub x: f64,
    pub y: f64,
}

/// Header badge for an aggregate that has a score, e.g. "EU Readiness: 65.0".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateBadge {
    pub id: String,
    pub name: String,
    pub score: f64,
    pub label: String,
}
