use once_cell::sync::Lazy;
use qualis_types::QualityMetric;
use regex::Regex;
use serde::Serialize;

static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").expect("valid regex")
});

/// Numeric value to plot for a formatted metric string.
///
/// Takes the leading numeric token ("98.5%" -> 98.5, "15m ago" -> 15) and
/// yields 0 when there is none. Display only: the metric's string stays
/// the source of truth.
pub fn chart_value(display: &str) -> f64 {
    LEADING_NUMBER
        .captures(display)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

pub fn chart_series(metrics: &[QualityMetric]) -> Vec<ChartPoint> {
    metrics
        .iter()
        .map(|metric| ChartPoint {
            name: metric.name.clone(),
            value: chart_value(&metric.value),
        })
        .collect()
}
