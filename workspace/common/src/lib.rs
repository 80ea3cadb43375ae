//! Data and transport types shared by the compute layer and the dashboard.
//! The payload structs mirror the data/prediction API bodies so callers can
//! deserialize responses without duplicating shapes.

mod alert;
mod payload;
mod period;
mod series;
pub mod timestamp;

pub use alert::{Alert, AlertLevel};
pub use payload::{
    ConfidenceInterval, ConsumptionRecord, LoadDataResponse, PredictRequest, PredictResponse,
    PredictionResult, DEFAULT_FORECAST_STEPS,
};
pub use period::{ModelKind, Period, TimeUnit};
pub use series::{ChartPoint, ForecastPoint, Observation, StitchedSeries};
pub use timestamp::{format_timestamp, parse_timestamp, TimestampError};

use thiserror::Error;

/// A string did not name any variant of a closed set (period, model, theme).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
