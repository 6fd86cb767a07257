use serde::{Deserialize, Serialize};

use super::record::ScoreMetric;
use crate::data::{default_aggregates, Aggregate};

/// Options for one map instance. Every field has a default so the host may
/// pass a partial object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Log hover and click decisions through the `log` facade.
    pub debug: bool,
    pub metric: ScoreMetric,
    pub aggregates: Vec<Aggregate>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            debug: false,
            metric: ScoreMetric::default(),
            aggregates: default_aggregates(),
        }
    }
}

impl MapConfig {
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_metric(mut self, metric: ScoreMetric) -> Self {
        self.metric = metric;
        self
    }
}
