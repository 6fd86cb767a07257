use serde_wasm_bindgen;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::dependency::JsNavigator;
use crate::error::MapError;
use crate::logic::{legend, MapLogic, Navigator};
use crate::types::{CountryScoreRecord, FeatureInput, MapConfig};

#[wasm_bindgen]
pub struct ChoroplethMap {
    logic: MapLogic,
    navigator: Option<Box<dyn Navigator>>,
}

impl Default for ChoroplethMap {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ChoroplethMap {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            logic: MapLogic::default(),
            navigator: None,
        }
    }

    #[wasm_bindgen]
    pub fn with_config(config: JsValue) -> Result<ChoroplethMap, JsValue> {
        let mut map = Self::new();
        map.set_config(config)?;
        Ok(map)
    }

    /// Accepts a partial config object; `undefined`/`null` restores defaults.
    #[wasm_bindgen]
    pub fn set_config(&mut self, config: JsValue) -> Result<(), JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            MapConfig::default()
        } else {
            serde_wasm_bindgen::from_value::<MapConfig>(config)
                .map_err(|e| MapError::InvalidConfig(e.to_string()))?
        };
        self.logic.set_config(config);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_debug(&mut self, debug: bool) {
        self.logic.set_debug(debug);
    }

    #[wasm_bindgen]
    pub fn is_debug(&self) -> bool {
        self.logic.config().debug
    }

    #[wasm_bindgen]
    pub fn set_records(&mut self, records: JsValue) -> Result<(), JsValue> {
        let records = serde_wasm_bindgen::from_value::<Vec<CountryScoreRecord>>(records)
            .map_err(|e| MapError::InvalidRecords(e.to_string()))?;
        self.logic.set_records(records);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_features(&mut self, features: JsValue) -> Result<(), JsValue> {
        let features = serde_wasm_bindgen::from_value::<FeatureInput>(features)
            .map_err(|e| MapError::InvalidFeatures(e.to_string()))?;
        self.logic.set_features(features.into_features());
        Ok(())
    }

    #[wasm_bindgen]
    pub fn feature_count(&self) -> usize {
        self.logic.feature_count()
    }

    #[wasm_bindgen]
    pub fn render(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self.logic.rendered()).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen]
    pub fn render_feature(&self, index: usize) -> Result<JsValue, JsValue> {
        let feature = self.logic.feature(index)?;
        Ok(serde_wasm_bindgen::to_value(feature)?)
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, index: usize, x: f64, y: f64) -> Result<(), JsValue> {
        Ok(self.logic.pointer_move(index, x, y)?)
    }

    #[wasm_bindgen]
    pub fn pointer_leave(&mut self) {
        self.logic.pointer_leave();
    }

    #[wasm_bindgen]
    pub fn has_hover(&self) -> bool {
        self.logic.hover().is_some()
    }

    #[wasm_bindgen]
    pub fn get_hover(&self) -> JsValue {
        match self.logic.hover() {
            Some(hover) => serde_wasm_bindgen::to_value(hover).unwrap_or(JsValue::NULL),
            None => JsValue::NULL,
        }
    }

    #[wasm_bindgen]
    pub fn is_clickable(&self, index: usize) -> Result<bool, JsValue> {
        Ok(self.logic.is_clickable(index)?)
    }

    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen]
    pub fn set_navigator(&mut self, callback: js_sys::Function) {
        self.navigator = Some(Box::new(JsNavigator::new(callback)));
    }

    /// Returns the navigation target; the navigator, if any, is invoked too.
    #[wasm_bindgen]
    pub fn click(&mut self, index: usize) -> Result<Option<String>, JsValue> {
        let target = match self.navigator.as_mut() {
            Some(navigator) => self.logic.click(index, &mut **navigator)?,
            None => self.logic.click(index, &mut |_: &str| {})?,
        };
        Ok(target)
    }

    #[wasm_bindgen]
    pub fn click_aggregate(&mut self, aggregate_id: &str) -> Result<Option<String>, JsValue> {
        let target = match self.navigator.as_mut() {
            Some(navigator) => self.logic.click_aggregate(aggregate_id, &mut **navigator)?,
            None => self.logic.click_aggregate(aggregate_id, &mut |_: &str| {})?,
        };
        Ok(target)
    }

    #[wasm_bindgen]
    pub fn get_aggregate_badges(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.logic.aggregate_badges()).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen]
    pub fn get_legend(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&legend()).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen]
    pub fn get_last_render_duration(&self) -> f64 {
        self.logic.metrics().last_render_duration_ms
    }

    #[wasm_bindgen]
    pub fn get_resolved_count(&self) -> usize {
        self.logic.metrics().resolved_features
    }

    #[wasm_bindgen]
    pub fn destroy(&mut self) {
        self.logic.destroy();
        self.navigator = None;
    }
}

#[cfg(test)]
impl ChoroplethMap {
    pub(crate) fn logic_mut(&mut self) -> &mut MapLogic {
        &mut self.logic
    }

    pub(crate) fn set_rust_navigator(&mut self, navigator: Box<dyn Navigator>) {
        self.navigator = Some(navigator);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GeographicFeature;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn loaded() -> ChoroplethMap {
        let mut map = ChoroplethMap::new();
        let features: Vec<GeographicFeature> = serde_json::from_value(json!([
            { "id": "356", "properties": { "NAME_LONG": "India" } },
            { "properties": { "ISO_A3": "FRA", "NAME_LONG": "France" } },
            { "properties": { "name": "Atlantis" } }
        ]))
        .unwrap();
        map.logic_mut().set_records(vec![
            CountryScoreRecord::new("IN", "India", Some(60.0)),
            CountryScoreRecord::new("EU", "European Union", Some(65.0)),
        ]);
        map.logic_mut().set_features(features);
        map
    }

    #[test]
    fn starts_empty() {
        let map = ChoroplethMap::new();
        assert_eq!(map.feature_count(), 0);
        assert!(!map.has_hover());
        assert!(!map.is_debug());
    }

    #[test]
    fn clicks_resolve_targets_without_navigator() {
        let mut map = loaded();
        assert_eq!(map.feature_count(), 3);
        assert_eq!(map.click(0).ok().flatten().as_deref(), Some("IN"));
        assert_eq!(map.click(1).ok().flatten().as_deref(), Some("EU"));
        assert_eq!(map.click(2).ok().flatten(), None);
        assert_eq!(map.get_resolved_count(), 2);
    }

    #[test]
    fn clicks_reach_installed_navigator() {
        let mut map = loaded();
        let visited = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&visited);
        map.set_rust_navigator(Box::new(move |target: &str| {
            sink.borrow_mut().push(target.to_string())
        }));

        assert!(map.click(1).is_ok());
        assert!(map.click(2).is_ok());
        assert!(map.click_aggregate("EU").is_ok());
        assert_eq!(*visited.borrow(), vec!["EU".to_string(), "EU".to_string()]);
    }

    #[test]
    fn pointer_events_track_hover() {
        let mut map = loaded();
        assert!(map.pointer_move(1, 10.0, 20.0).is_ok());
        assert!(map.has_hover());
        map.pointer_leave();
        assert!(!map.has_hover());
    }

    #[test]
    fn debug_toggle_is_explicit() {
        let mut map = loaded();
        map.set_debug(true);
        assert!(map.is_debug());
        map.destroy();
        assert_eq!(map.feature_count(), 0);
    }
}
