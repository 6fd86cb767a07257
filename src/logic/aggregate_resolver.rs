use super::normalizer::{feature_identifier, feature_name};
use super::score_index::CountryScoreIndex;
use crate::data::Aggregate;
use crate::types::{CountryScoreRecord, GeographicFeature, ResolvedFeatureBinding};

/// How a shape found its record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    Direct(&'a CountryScoreRecord),
    Aggregate {
        aggregate: &'a Aggregate,
        record: &'a CountryScoreRecord,
    },
    NoData,
}

impl<'a> Resolution<'a> {
    pub fn record(&self) -> Option<&'a CountryScoreRecord> {
        match *self {
            Resolution::Direct(record) => Some(record),
            Resolution::Aggregate { record, .. } => Some(record),
            Resolution::NoData => None,
        }
    }
}

pub struct AggregateResolver<'i, 'a> {
    index: &'i CountryScoreIndex<'a>,
    aggregates: &'a [Aggregate],
}

impl<'i, 'a> AggregateResolver<'i, 'a> {
    pub fn new(index: &'i CountryScoreIndex<'a>, aggregates: &'a [Aggregate]) -> Self {
        Self { index, aggregates }
    }

    /// A direct record beats aggregate membership. Case and surrounding
    /// whitespace of `canonical_id` are ignored.
    pub fn resolve(&self, canonical_id: Option<&str>) -> Resolution<'a> {
        let Some(id) = canonical_id.map(|id| id.trim().to_ascii_uppercase()) else {
            return Resolution::NoData;
        };
        let id = id.as_str();

        if let Some(record) = self.index.get(id) {
            return Resolution::Direct(record);
        }

        self.aggregates
            .iter()
            .filter(|aggregate| aggregate.has_member(id))
            .find_map(|aggregate| {
                self.index
                    .get(&aggregate.id)
                    .map(|record| Resolution::Aggregate { aggregate, record })
            })
            .unwrap_or(Resolution::NoData)
    }

    /// Resolves one shape into its binding for this pass.
    pub fn bind(&self, feature: &GeographicFeature) -> ResolvedFeatureBinding {
        let canonical_id = feature_identifier(feature);
        let shape_name = feature_name(feature);
        let raw_id = feature.id_text();

        match self.resolve(canonical_id.as_deref()) {
            Resolution::Direct(record) => ResolvedFeatureBinding {
                click_target: canonical_id.clone(),
                display_name: shape_name.unwrap_or_else(|| record.name.clone()),
                canonical_id,
                raw_id,
                record: Some(record.clone()),
                aggregate_id: None,
            },
            Resolution::Aggregate { aggregate, record } => {
                let display_name = if record.name.is_empty() {
                    aggregate.name.clone()
                } else {
                    record.name.clone()
                };
                ResolvedFeatureBinding {
                    canonical_id,
                    raw_id,
                    click_target: Some(aggregate.id.clone()),
                    display_name,
                    record: Some(record.clone()),
                    aggregate_id: Some(aggregate.id.clone()),
                }
            }
            Resolution::NoData => ResolvedFeatureBinding {
                canonical_id,
                raw_id,
                click_target: None,
                display_name: shape_name.unwrap_or_default(),
                record: None,
                aggregate_id: None,
            },
        }
    }
}
