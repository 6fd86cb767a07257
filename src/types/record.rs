use serde::{Deserialize, Serialize};

/// One sovereign entity or aggregate as served by the score API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CountryScoreRecord {
    pub iso_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub readiness_score: Option<f64>,
    #[serde(default)]
    pub policy_score: Option<f64>,
    #[serde(default)]
    pub infra_score: Option<f64>,
    #[serde(default)]
    pub language_score: Option<f64>,
    #[serde(default)]
    pub risk_score: Option<f64>,
}

impl CountryScoreRecord {
    pub fn new(iso_code: &str, name: &str, readiness_score: Option<f64>) -> Self {
        Self {
            iso_code: iso_code.to_string(),
            name: name.to_string(),
            readiness_score,
            ..Self::default()
        }
    }

    pub fn score(&self, metric: ScoreMetric) -> Option<f64> {
        match metric {
            ScoreMetric::Readiness => self.readiness_score,
            ScoreMetric::Policy => self.policy_score,
            ScoreMetric::Infra => self.infra_score,
            ScoreMetric::Language => self.language_score,
            ScoreMetric::Risk => self.risk_score,
        }
    }
}

/// Which component score colors the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreMetric {
    #[default]
    Readiness,
    Policy,
    Infra,
    Language,
    Risk,
}

impl ScoreMetric {
    pub fn label(self) -> &'static str {
        match self {
            ScoreMetric::Readiness => "Readiness",
            ScoreMetric::Policy => "Policy",
            ScoreMetric::Infra => "Infrastructure",
            ScoreMetric::Language => "Language",
            ScoreMetric::Risk => "Risk",
        }
    }
}
