//! Request and response bodies of the data and prediction API.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::period::{ModelKind, Period};
use crate::timestamp::{iso, iso_vec};

/// Default number of forecast steps requested.
pub const DEFAULT_FORECAST_STEPS: u32 = 10;

fn default_unit() -> String {
    "kWh".to_string()
}

/// A single resampled consumption row returned by `/api/load_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionRecord {
    #[serde(with = "iso")]
    pub timestamp: NaiveDateTime,
    pub consumption: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
}

/// Body of `/api/load_data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadDataResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<ConsumptionRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LoadDataResponse {
    /// Success with missing data is treated as an empty series.
    pub fn into_result(self) -> Result<Vec<ConsumptionRecord>, String> {
        if self.success {
            Ok(self.data.unwrap_or_default())
        } else {
            Err(self.error.unwrap_or_else(|| "unknown error".to_string()))
        }
    }
}

/// Body posted to `/api/predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    pub period: Period,
    pub model: ModelKind,
    pub steps: u32,
}

impl Default for PredictRequest {
    fn default() -> Self {
        Self {
            period: Period::default(),
            model: ModelKind::default(),
            steps: DEFAULT_FORECAST_STEPS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

/// Forecast produced by one of the models.
///
/// `timestamps` and `values` are parallel; `confidence_intervals` is absent
/// for models that do not estimate uncertainty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(with = "iso_vec")]
    pub timestamps: Vec<NaiveDateTime>,
    pub values: Vec<f64>,
    #[serde(default)]
    pub model_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_intervals: Option<Vec<ConfidenceInterval>>,
}

/// Body of `/api/predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predictions: Option<PredictionResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictResponse {
    pub fn into_result(self) -> Result<PredictionResult, String> {
        match (self.success, self.predictions) {
            (true, Some(predictions)) => Ok(predictions),
            (true, None) => Err("response carried no predictions".to_string()),
            (false, _) => Err(self.error.unwrap_or_else(|| "unknown error".to_string())),
        }
    }
}
