use super::color_scale::format_score;
use super::interaction::{InteractionController, Navigator};
use super::render::render_features;
use super::score_index::CountryScoreIndex;
use crate::data::Aggregate;
use crate::dependency::measure;
use crate::error::MapError;
use crate::types::{
    AggregateBadge, CountryScoreRecord, GeographicFeature, HoverState, MapConfig, RenderMetrics,
    RenderedFeature,
};

/// State of one map instance: the current snapshots, the output of the last
/// render pass, and the hover state. Any snapshot change re-renders every
/// feature from scratch.
pub struct MapLogic {
    config: MapConfig,
    records: Vec<CountryScoreRecord>,
    features: Vec<GeographicFeature>,
    rendered: Vec<RenderedFeature>,
    controller: InteractionController,
    metrics: RenderMetrics,
}

impl Default for MapLogic {
    fn default() -> Self {
        Self::new(MapConfig::default())
    }
}

impl MapLogic {
    pub fn new(config: MapConfig) -> Self {
        Self {
            controller: InteractionController::new(config.debug),
            config,
            records: Vec::new(),
            features: Vec::new(),
            rendered: Vec::new(),
            metrics: RenderMetrics::default(),
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Aggregate codes from the host are uppercased before use.
    pub fn set_config(&mut self, mut config: MapConfig) {
        config.aggregates = config
            .aggregates
            .iter()
            .map(|a| Aggregate::new(&a.id, &a.name, &a.members))
            .collect();
        self.controller.set_debug(config.debug);
        self.config = config;
        self.rerender();
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.config.debug = debug;
        self.controller.set_debug(debug);
    }

    pub fn set_records(&mut self, records: Vec<CountryScoreRecord>) {
        self.records = records;
        self.rerender();
    }

    /// Hover is dropped because indices refer to the old collection.
    pub fn set_features(&mut self, features: Vec<GeographicFeature>) {
        self.features = features;
        self.controller.clear();
        self.rerender();
    }

    pub fn records(&self) -> &[CountryScoreRecord] {
        &self.records
    }

    pub fn rendered(&self) -> &[RenderedFeature] {
        &self.rendered
    }

    pub fn feature_count(&self) -> usize {
        self.rendered.len()
    }

    pub fn feature(&self, index: usize) -> Result<&RenderedFeature, MapError> {
        self.rendered.get(index).ok_or(MapError::FeatureOutOfRange {
            index,
            len: self.rendered.len(),
        })
    }

    pub fn pointer_move(&mut self, index: usize, x: f64, y: f64) -> Result<(), MapError> {
        let feature = self.rendered.get(index).ok_or(MapError::FeatureOutOfRange {
            index,
            len: self.rendered.len(),
        })?;
        self.controller.pointer_move(feature, x, y);
        Ok(())
    }

    pub fn pointer_leave(&mut self) {
        self.controller.pointer_leave();
    }

    pub fn hover(&self) -> Option<&HoverState> {
        self.controller.hover()
    }

    pub fn is_clickable(&self, index: usize) -> Result<bool, MapError> {
        self.feature(index).map(InteractionController::is_clickable)
    }

    pub fn click<N>(&self, index: usize, navigator: &mut N) -> Result<Option<String>, MapError>
    where
        N: Navigator + ?Sized,
    {
        let feature = self.feature(index)?;
        Ok(self.controller.click(feature, navigator))
    }

    /// Aggregates whose own record carries a score for the current metric.
    pub fn aggregate_badges(&self) -> Vec<AggregateBadge> {
        let index = CountryScoreIndex::build(&self.records);
        let metric = self.config.metric;
        self.config
            .aggregates
            .iter()
            .filter_map(|aggregate| {
                let record = index.get(&aggregate.id)?;
                let score = record.score(metric).filter(|s| s.is_finite())?;
                let name = if record.name.is_empty() {
                    aggregate.name.clone()
                } else {
                    record.name.clone()
                };
                Some(AggregateBadge {
                    id: aggregate.id.clone(),
                    label: format!("{} {}", aggregate.id, format_score(metric, Some(score))),
                    name,
                    score,
                })
            })
            .collect()
    }

    /// Badge click: navigates only when the aggregate's badge is shown.
    pub fn click_aggregate<N>(
        &self,
        aggregate_id: &str,
        navigator: &mut N,
    ) -> Result<Option<String>, MapError>
    where
        N: Navigator + ?Sized,
    {
        let id = aggregate_id.trim().to_ascii_uppercase();
        if !self.config.aggregates.iter().any(|a| a.id == id) {
            return Err(MapError::UnknownAggregate(id));
        }
        let shown = self.aggregate_badges().into_iter().any(|badge| badge.id == id);
        Ok(shown.then(|| self.controller.click_badge(&id, navigator)))
    }

    pub fn metrics(&self) -> RenderMetrics {
        self.metrics
    }

    pub fn destroy(&mut self) {
        self.records.clear();
        self.features.clear();
        self.rendered.clear();
        self.controller.clear();
        self.metrics = RenderMetrics::default();
    }

    fn rerender(&mut self) {
        let (rendered, duration) =
            measure(|| render_features(&self.features, &self.records, &self.config));
        debug_assert_eq!(rendered.len(), self.features.len());
        let resolved = rendered.iter().filter(|f| f.clickable).count();
        self.metrics.update_render(duration, rendered.len(), resolved);
        self.rendered = rendered;

        // Keep an existing hover in step with the new pass.
        let refreshed = self
            .controller
            .hover()
            .map(|hover| (hover.feature_index, hover.x, hover.y));
        if let Some((index, x, y)) = refreshed {
            match self.rendered.get(index) {
                Some(feature) => self.controller.pointer_move(feature, x, y),
                None => self.controller.clear(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScoreMetric;
    use serde_json::json;

    fn features() -> Vec<GeographicFeature> {
        serde_json::from_value(json!([
            { "id": "356", "properties": { "NAME_LONG": "India" } },
            { "properties": { "ISO_A3": "FRA", "NAME_LONG": "France" } },
            { "properties": { "NAME": "Atlantis" } }
        ]))
        .unwrap()
    }

    fn records() -> Vec<CountryScoreRecord> {
        vec![
            CountryScoreRecord::new("IN", "India", Some(60.0)),
            CountryScoreRecord::new("EU", "European Union", Some(65.0)),
        ]
    }

    fn loaded() -> MapLogic {
        let mut logic = MapLogic::default();
        logic.set_records(records());
        logic.set_features(features());
        logic
    }

    #[test]
    fn setting_snapshots_renders_every_feature() {
        let logic = loaded();
        assert_eq!(logic.feature_count(), 3);
        assert_eq!(logic.metrics().rendered_features, 3);
        assert_eq!(logic.metrics().resolved_features, 2);
    }

    #[test]
    fn out_of_range_pointer_is_an_error() {
        let mut logic = loaded();
        assert_eq!(
            logic.pointer_move(9, 0.0, 0.0),
            Err(MapError::FeatureOutOfRange { index: 9, len: 3 })
        );
        assert!(logic.hover().is_none());
    }

    #[test]
    fn hover_and_click_scenario() {
        let mut logic = loaded();
        let mut visited = Vec::new();
        let mut navigator = |target: &str| visited.push(target.to_string());

        logic.pointer_move(0, 100.0, 100.0).unwrap();
        let hover = logic.hover().unwrap();
        assert_eq!(hover.tooltip.title, "India");
        assert_eq!(hover.tooltip.score_label, "Readiness: 60.0");
        assert_eq!(logic.click(0, &mut navigator).unwrap().as_deref(), Some("IN"));

        logic.pointer_move(1, 120.0, 110.0).unwrap();
        assert_eq!(logic.hover().unwrap().tooltip.title, "European Union");
        assert_eq!(logic.click(1, &mut navigator).unwrap().as_deref(), Some("EU"));

        assert_eq!(logic.click(2, &mut navigator).unwrap(), None);
        assert_eq!(visited, vec!["IN", "EU"]);
    }

    #[test]
    fn record_change_refreshes_hover() {
        let mut logic = loaded();
        logic.pointer_move(1, 5.0, 6.0).unwrap();
        logic.set_records(vec![CountryScoreRecord::new("IN", "India", Some(60.0))]);

        let hover = logic.hover().unwrap();
        assert_eq!(hover.tooltip.title, "France");
        assert_eq!(hover.tooltip.score_label, "No data");
        assert_eq!((hover.x, hover.y), (5.0, 6.0));
        assert_eq!(logic.is_clickable(1), Ok(false));
    }

    #[test]
    fn feature_change_drops_hover() {
        let mut logic = loaded();
        logic.pointer_move(0, 1.0, 1.0).unwrap();
        logic.set_features(features());
        assert!(logic.hover().is_none());
    }

    #[test]
    fn aggregate_badge_reflects_record() {
        let logic = loaded();
        let badges = logic.aggregate_badges();
        assert_eq!(badges.len(), 1);
        assert_eq!(badges[0].id, "EU");
        assert_eq!(badges[0].label, "EU Readiness: 65.0");

        let mut visited = Vec::new();
        let mut navigator = |target: &str| visited.push(target.to_string());
        assert_eq!(
            logic.click_aggregate("eu", &mut navigator).unwrap().as_deref(),
            Some("EU")
        );
        assert_eq!(
            logic.click_aggregate("XX", &mut navigator),
            Err(MapError::UnknownAggregate("XX".into()))
        );
        assert_eq!(visited, vec!["EU"]);
    }

    #[test]
    fn badge_hidden_without_score() {
        let mut logic = loaded();
        logic.set_config(MapConfig::default().with_metric(ScoreMetric::Policy));
        assert!(logic.aggregate_badges().is_empty());

        let mut calls = 0;
        let mut navigator = |_: &str| calls += 1;
        assert_eq!(logic.click_aggregate("EU", &mut navigator), Ok(None));
        assert_eq!(calls, 0);
    }

    #[test]
    fn host_aggregates_are_normalized() {
        let mut logic = loaded();
        let nordics = Aggregate {
            id: "nd".into(),
            name: "Nordics".into(),
            members: ["fr".to_string()].into_iter().collect(),
        };
        logic.set_config(MapConfig {
            aggregates: vec![nordics],
            ..MapConfig::default()
        });
        logic.set_records(vec![CountryScoreRecord::new("ND", "Nordics", Some(30.0))]);
        assert_eq!(logic.rendered()[1].binding.click_target.as_deref(), Some("ND"));
    }

    #[test]
    fn debug_flag_follows_config() {
        let mut logic = MapLogic::new(MapConfig::default().with_debug(true));
        assert!(logic.config().debug);
        logic.set_features(features());
        logic.pointer_move(0, 1.0, 1.0).unwrap();
        assert_eq!(logic.hover().unwrap().binding.raw_id.as_deref(), Some("356"));

        logic.set_debug(false);
        assert!(!logic.config().debug);
        logic.set_config(MapConfig::default().with_debug(true));
        assert!(logic.config().debug);
    }

    #[test]
    fn destroy_clears_everything() {
        let mut logic = loaded();
        logic.pointer_move(0, 0.0, 0.0).unwrap();
        logic.destroy();
        assert_eq!(logic.feature_count(), 0);
        assert!(logic.hover().is_none());
        assert!(logic.records().is_empty());
    }
}
