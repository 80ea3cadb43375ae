use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::timestamp::iso;

/// One measured consumption sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(with = "iso")]
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

impl Observation {
    pub fn new(timestamp: NaiveDateTime, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// One predicted sample, optionally carrying a confidence interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    #[serde(with = "iso")]
    pub timestamp: NaiveDateTime,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
}

impl ForecastPoint {
    pub fn new(timestamp: NaiveDateTime, value: f64) -> Self {
        Self {
            timestamp,
            value,
            lower: None,
            upper: None,
        }
    }

    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower = Some(lower);
        self.upper = Some(upper);
        self
    }

    /// Both bounds, if the point carries a complete interval.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.lower.zip(self.upper)
    }
}

/// A renderer-ready `{x, y}` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    #[serde(with = "iso")]
    pub x: NaiveDateTime,
    pub y: f64,
}

impl ChartPoint {
    pub fn new(x: NaiveDateTime, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<&Observation> for ChartPoint {
    fn from(observation: &Observation) -> Self {
        Self::new(observation.timestamp, observation.value)
    }
}

/// Historical and forecast series aligned for a line chart.
///
/// `forecast`, `lower_band` and `upper_band` all start with the bridge point,
/// the last historical observation, so the segments join without a gap. The
/// bands share the forecast's x-coordinates and are empty when `has_bands`
/// is false.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StitchedSeries {
    pub historical: Vec<ChartPoint>,
    pub forecast: Vec<ChartPoint>,
    pub lower_band: Vec<ChartPoint>,
    pub upper_band: Vec<ChartPoint>,
    pub has_bands: bool,
}

impl StitchedSeries {
    /// The point shared by the end of `historical` and the start of `forecast`.
    pub fn bridge(&self) -> Option<&ChartPoint> {
        self.forecast.first()
    }

    /// Number of predicted points, excluding the bridge.
    pub fn forecast_len(&self) -> usize {
        self.forecast.len().saturating_sub(1)
    }
}
