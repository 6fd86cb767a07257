use crate::constants::{
    HIGH_BAND_MIN, HIGH_COLOR, HOVER_FILL, LOW_COLOR, MEDIUM_BAND_MIN, MEDIUM_COLOR,
    NO_DATA_COLOR, PRESSED_FILL, STROKE_COLOR, STROKE_WIDTH,
};
use crate::types::{Cursor, FeatureStyle, LegendEntry, ScoreBand, ScoreMetric};

impl ScoreBand {
    /// Non-finite scores count as absent.
    pub fn for_score(score: Option<f64>) -> Self {
        match score {
            Some(s) if !s.is_finite() => ScoreBand::NoData,
            None => ScoreBand::NoData,
            Some(s) if s < MEDIUM_BAND_MIN => ScoreBand::Low,
            Some(s) if s < HIGH_BAND_MIN => ScoreBand::Medium,
            Some(_) => ScoreBand::High,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreBand::NoData => NO_DATA_COLOR,
            ScoreBand::Low => LOW_COLOR,
            ScoreBand::Medium => MEDIUM_COLOR,
            ScoreBand::High => HIGH_COLOR,
        }
    }
}

pub fn color_for(score: Option<f64>) -> &'static str {
    ScoreBand::for_score(score).color()
}

/// The finite bands, lowest first.
pub fn legend() -> Vec<LegendEntry> {
    [ScoreBand::Low, ScoreBand::Medium, ScoreBand::High]
        .into_iter()
        .map(|band| LegendEntry {
            band,
            label: band.label().to_string(),
            color: band.color().to_string(),
        })
        .collect()
}

impl FeatureStyle {
    pub fn for_band(band: ScoreBand, clickable: bool) -> Self {
        let fill = band.color();
        Self {
            default_fill: fill.to_string(),
            hover_fill: if clickable { HOVER_FILL } else { fill }.to_string(),
            pressed_fill: PRESSED_FILL.to_string(),
            stroke: STROKE_COLOR.to_string(),
            stroke_width: STROKE_WIDTH,
            cursor: if clickable {
                Cursor::Pointer
            } else {
                Cursor::Default
            },
        }
    }
}

/// Tooltip line, e.g. `Readiness: 60.0` or `No data`.
pub fn format_score(metric: ScoreMetric, score: Option<f64>) -> String {
    match score.filter(|s| s.is_finite()) {
        Some(s) => format!("{}: {:.1}", metric.label(), s),
        None => ScoreBand::NoData.label().to_string(),
    }
}
