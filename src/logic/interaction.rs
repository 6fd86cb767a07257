use crate::constants::LOG_TARGET;
use crate::types::{HoverState, RenderedFeature};

/// Application-level route change to a canonical identifier.
pub trait Navigator {
    fn navigate(&mut self, target: &str);
}

impl<F> Navigator for F
where
    F: FnMut(&str),
{
    fn navigate(&mut self, target: &str) {
        self(target)
    }
}

/// Tracks the single hovered shape of one map and decides clicks.
#[derive(Debug, Default)]
pub struct InteractionController {
    hover: Option<HoverState>,
    debug: bool,
}

impl InteractionController {
    pub fn new(debug: bool) -> Self {
        Self { hover: None, debug }
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    /// Replaces whatever was hovered before.
    pub fn pointer_move(&mut self, feature: &RenderedFeature, x: f64, y: f64) {
        if self.debug {
            log::debug!(
                target: LOG_TARGET,
                "hover iso={:?} raw_id={:?} name={:?} target={:?} score={:?}",
                feature.binding.canonical_id,
                feature.binding.raw_id,
                feature.binding.display_name,
                feature.binding.click_target,
                feature.tooltip.score
            );
        }
        self.hover = Some(HoverState {
            feature_index: feature.index,
            binding: feature.binding.clone(),
            tooltip: feature.tooltip.clone(),
            x,
            y,
        });
    }

    pub fn pointer_leave(&mut self) {
        self.hover = None;
    }

    pub fn hover(&self) -> Option<&HoverState> {
        self.hover.as_ref()
    }

    pub fn clear(&mut self) {
        self.hover = None;
    }

    pub fn is_clickable(feature: &RenderedFeature) -> bool {
        feature.binding.has_record()
    }

    /// Navigates to the shape's target when it has a record.
    pub fn click<N>(&self, feature: &RenderedFeature, navigator: &mut N) -> Option<String>
    where
        N: Navigator + ?Sized,
    {
        if self.debug {
            log::debug!(
                target: LOG_TARGET,
                "click iso={:?} raw_id={:?} target={:?} has_data={}",
                feature.binding.canonical_id,
                feature.binding.raw_id,
                feature.binding.click_target,
                feature.binding.has_record()
            );
        }
        if !Self::is_clickable(feature) {
            return None;
        }
        let target = feature.binding.click_target.clone()?;
        navigator.navigate(&target);
        Some(target)
    }

    /// Click on an aggregate's header badge.
    pub fn click_badge<N>(&self, target: &str, navigator: &mut N) -> String
    where
        N: Navigator + ?Sized,
    {
        if self.debug {
            log::debug!(target: LOG_TARGET, "click target={}", target);
        }
        navigator.navigate(target);
        target.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::render::render_features;
    use crate::types::{CountryScoreRecord, GeographicFeature, MapConfig};
    use serde_json::json;

    fn rendered() -> Vec<RenderedFeature> {
        let features: Vec<GeographicFeature> = serde_json::from_value(json!([
            { "id": "356", "properties": { "NAME_LONG": "India" } },
            { "properties": { "ISO_A3": "FRA", "NAME_LONG": "France" } },
            { "properties": { "name": "Atlantis" } }
        ]))
        .unwrap();
        let records = vec![
            CountryScoreRecord::new("IN", "India", Some(60.0)),
            CountryScoreRecord::new("EU", "European Union", Some(65.0)),
        ];
        render_features(&features, &records, &MapConfig::default())
    }

    #[test]
    fn hover_is_overwritten_not_stacked() {
        let rendered = rendered();
        let mut controller = InteractionController::default();
        controller.pointer_move(&rendered[0], 100.0, 100.0);
        controller.pointer_move(&rendered[1], 120.0, 110.0);

        let hover = controller.hover().unwrap();
        assert_eq!(hover.feature_index, 1);
        assert_eq!(hover.tooltip.title, "European Union");
        assert_eq!(hover.tooltip.score_label, "Readiness: 65.0");
        assert_eq!((hover.x, hover.y), (120.0, 110.0));
    }

    #[test]
    fn leave_clears_hover() {
        let rendered = rendered();
        let mut controller = InteractionController::new(true);
        controller.pointer_move(&rendered[0], 1.0, 2.0);
        controller.pointer_leave();
        assert!(controller.hover().is_none());
    }

    #[test]
    fn click_navigates_to_own_or_aggregate_target() {
        let rendered = rendered();
        let controller = InteractionController::default();
        let mut visited = Vec::new();
        let mut navigator = |target: &str| visited.push(target.to_string());

        assert_eq!(controller.click(&rendered[0], &mut navigator).as_deref(), Some("IN"));
        assert_eq!(controller.click(&rendered[1], &mut navigator).as_deref(), Some("EU"));
        assert_eq!(visited, vec!["IN", "EU"]);
    }

    #[test]
    fn non_clickable_shape_emits_nothing() {
        let rendered = rendered();
        let controller = InteractionController::default();
        let mut calls = 0;
        let mut navigator = |_: &str| calls += 1;

        assert!(!InteractionController::is_clickable(&rendered[2]));
        assert_eq!(controller.click(&rendered[2], &mut navigator), None);
        assert_eq!(calls, 0);
    }

    #[test]
    fn controllers_do_not_share_hover() {
        let rendered = rendered();
        let mut first = InteractionController::default();
        let second = InteractionController::default();
        first.pointer_move(&rendered[0], 0.0, 0.0);
        assert!(first.hover().is_some());
        assert!(second.hover().is_none());
    }
}
