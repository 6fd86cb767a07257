use super::aggregate_resolver::AggregateResolver;
use super::color_scale::format_score;
use super::score_index::CountryScoreIndex;
use crate::types::{
    CountryScoreRecord, FeatureStyle, GeographicFeature, MapConfig, RenderedFeature, ScoreBand,
    TooltipPayload,
};

/// Per-pass renderer. Holds the index built from one record snapshot.
pub struct ChoroplethRenderer<'a> {
    index: CountryScoreIndex<'a>,
    config: &'a MapConfig,
}

impl<'a> ChoroplethRenderer<'a> {
    pub fn new(records: &'a [CountryScoreRecord], config: &'a MapConfig) -> Self {
        Self {
            index: CountryScoreIndex::build(records),
            config,
        }
    }

    /// Called once per shape.
    pub fn render_feature(&self, index: usize, feature: &GeographicFeature) -> RenderedFeature {
        let resolver = AggregateResolver::new(&self.index, &self.config.aggregates);
        let binding = resolver.bind(feature);

        let metric = self.config.metric;
        let score = binding.record.as_ref().and_then(|record| record.score(metric));
        let band = ScoreBand::for_score(score);
        let clickable = binding.has_record();

        let title = if !binding.display_name.is_empty() {
            binding.display_name.clone()
        } else {
            binding
                .click_target
                .as_ref()
                .or(binding.canonical_id.as_ref())
                .cloned()
                .unwrap_or_else(|| "Unknown".to_string())
        };

        RenderedFeature {
            index,
            fill: band.color().to_string(),
            style: FeatureStyle::for_band(band, clickable),
            band,
            clickable,
            tooltip: TooltipPayload {
                title,
                score,
                score_label: format_score(metric, score),
            },
            binding,
        }
    }
}

/// Resolves and colors a whole feature collection against one record
/// snapshot. Nothing is kept between calls.
pub fn render_features(
    features: &[GeographicFeature],
    records: &[CountryScoreRecord],
    config: &MapConfig,
) -> Vec<RenderedFeature> {
    let renderer = ChoroplethRenderer::new(records, config);
    features
        .iter()
        .enumerate()
        .map(|(index, feature)| renderer.render_feature(index, feature))
        .collect()
}
