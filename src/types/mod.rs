pub mod binding;
pub mod config;
pub mod feature;
pub mod metrics;
pub mod record;
pub mod style;

pub use binding::{
    AggregateBadge, HoverState, RenderedFeature, ResolvedFeatureBinding, TooltipPayload,
};
pub use config::MapConfig;
pub use feature::{value_text, FeatureInput, GeographicFeature};
pub use metrics::RenderMetrics;
pub use record::{CountryScoreRecord, ScoreMetric};
pub use style::{Cursor, FeatureStyle, LegendEntry, ScoreBand};
