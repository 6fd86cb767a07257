use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A map shape as handed over by the geometry source. Geometry is not kept.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeographicFeature {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

impl GeographicFeature {
    pub fn new(id: Option<Value>, properties: Map<String, Value>) -> Self {
        Self {
            id,
            properties: Some(properties),
        }
    }

    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref().and_then(|props| props.get(key))
    }

    /// First of `keys` holding a non-null value, as text.
    pub fn first_property(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|key| self.property(key))
            .find(|value| !value.is_null())
            .and_then(value_text)
    }

    /// First of `keys` holding non-empty text.
    pub fn first_text_property(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|key| self.property(key))
            .filter_map(value_text)
            .find(|text| !text.is_empty())
    }

    /// Feature id as text, falling back to `properties.id`.
    pub fn id_text(&self) -> Option<String> {
        match self.id.as_ref().filter(|id| !id.is_null()) {
            Some(id) => value_text(id),
            None => self.property("id").filter(|id| !id.is_null()).and_then(value_text),
        }
    }
}

/// Renders strings and numbers as text; integral numbers lose their fraction.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => {
            if let Some(n) = number.as_u64() {
                Some(n.to_string())
            } else if let Some(n) = number.as_i64() {
                Some(n.to_string())
            } else {
                number.as_f64().map(|n| {
                    if n.is_finite() && n.fract() == 0.0 {
                        format!("{}", n as i64)
                    } else {
                        n.to_string()
                    }
                })
            }
        }
        _ => None,
    }
}

/// Accepts a GeoJSON `FeatureCollection` or a bare feature array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FeatureInput {
    Collection { features: Vec<GeographicFeature> },
    List(Vec<GeographicFeature>),
}

impl FeatureInput {
    pub fn into_features(self) -> Vec<GeographicFeature> {
        match self {
            FeatureInput::Collection { features } => features,
            FeatureInput::List(features) => features,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feature(value: Value) -> GeographicFeature {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn geometry_and_extra_members_are_ignored() {
        let f = feature(json!({
            "type": "Feature",
            "id": "356",
            "properties": { "NAME_LONG": "India" },
            "geometry": { "type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]] }
        }));
        assert_eq!(f.id_text().as_deref(), Some("356"));
        assert_eq!(f.first_text_property(&["NAME_LONG"]).as_deref(), Some("India"));
    }

    #[test]
    fn numeric_values_render_without_fraction() {
        assert_eq!(value_text(&json!(356)).as_deref(), Some("356"));
        assert_eq!(value_text(&json!(40.0)).as_deref(), Some("40"));
        assert_eq!(value_text(&json!(1.5)).as_deref(), Some("1.5"));
        assert_eq!(value_text(&json!(true)), None);
        assert_eq!(value_text(&Value::Null), None);
    }

    #[test]
    fn first_property_stops_at_first_non_null() {
        let f = feature(json!({ "properties": { "ISO_A2": null, "iso_a2": "-99", "A2": "FR" } }));
        assert_eq!(f.first_property(&["ISO_A2", "iso_a2", "A2"]).as_deref(), Some("-99"));
    }

    #[test]
    fn first_text_property_skips_empty_names() {
        let f = feature(json!({ "properties": { "NAME_LONG": "", "ADMIN": "France" } }));
        assert_eq!(f.first_text_property(&["NAME_LONG", "ADMIN"]).as_deref(), Some("France"));
    }

    #[test]
    fn id_falls_back_to_properties() {
        let f = feature(json!({ "id": null, "properties": { "id": 250 } }));
        assert_eq!(f.id_text().as_deref(), Some("250"));
        let bare = feature(json!({ "properties": null }));
        assert_eq!(bare.id_text(), None);
    }

    #[test]
    fn constructed_feature_reads_like_parsed_one() {
        let mut properties = Map::new();
        properties.insert("ISO_A3".into(), json!("NPL"));
        properties.insert("NAME".into(), json!("Nepal"));
        let built = GeographicFeature::new(Some(json!(524)), properties);

        let parsed = feature(json!({ "id": 524, "properties": { "ISO_A3": "NPL", "NAME": "Nepal" } }));
        assert_eq!(built, parsed);
        assert_eq!(built.id_text().as_deref(), Some("524"));
    }

    #[test]
    fn input_accepts_collection_and_list() {
        let collection: FeatureInput = serde_json::from_value(json!({
            "type": "FeatureCollection",
            "features": [{ "id": "356" }, { "id": "250" }]
        }))
        .unwrap();
        assert_eq!(collection.into_features().len(), 2);

        let list: FeatureInput = serde_json::from_value(json!([{ "id": "356" }])).unwrap();
        assert_eq!(list.into_features().len(), 1);
    }
}
