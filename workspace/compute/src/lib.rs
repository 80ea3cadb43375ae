//! Pure computations behind the energy dashboard: series stitching,
//! summary statistics, usage classification and threshold alerts.
//!
//! Nothing here performs I/O; every function is safe to call from any number
//! of callers at once.

pub mod alert;
pub mod convert;
pub mod error;
pub mod stats;
pub mod stitch;
pub mod usage;

pub use alert::{check_alert_threshold, DEFAULT_ALERT_THRESHOLD};
pub use convert::{forecast_points, observations};
pub use error::{ComputeError, Result};
pub use stats::{format_kwh, summarize, ConsumptionStats};
pub use stitch::stitch;
pub use usage::{latest_usage, LatestUsage, UsageLevel, UsageThresholds};

use common::{PredictionResult, StitchedSeries};

/// Decodes a prediction and stitches it onto `historical` in one step.
pub fn stitch_prediction(
    historical: &[common::Observation],
    prediction: &PredictionResult,
) -> Result<StitchedSeries> {
    let forecast = forecast_points(prediction)?;
    stitch(historical, &forecast)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use common::{ConfidenceInterval, Observation};

    fn ts(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_stitch_prediction_end_to_end() {
        let history = vec![Observation::new(ts(0), 10.0), Observation::new(ts(1), 12.0)];
        let prediction = PredictionResult {
            timestamps: vec![ts(2)],
            values: vec![14.0],
            model_type: "ARIMA".to_string(),
            confidence_intervals: Some(vec![ConfidenceInterval { lower: 11.0, upper: 17.0 }]),
        };

        let stitched = stitch_prediction(&history, &prediction).unwrap();
        assert!(stitched.has_bands);
        assert_eq!(stitched.upper_band[1].y, 17.0);
    }

    #[test]
    fn test_stitch_prediction_surfaces_empty_history() {
        let prediction = PredictionResult {
            timestamps: vec![],
            values: vec![],
            model_type: "LSTM".to_string(),
            confidence_intervals: None,
        };
        assert_eq!(stitch_prediction(&[], &prediction), Err(ComputeError::EmptyInput));
    }
}
