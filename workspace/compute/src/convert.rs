//! Conversions from API payloads into the series the compute layer works on.

use common::{ConsumptionRecord, ForecastPoint, Observation, PredictionResult};

use crate::error::{ComputeError, Result};

/// Maps consumption rows to observations, preserving order.
pub fn observations(records: &[ConsumptionRecord]) -> Vec<Observation> {
    records
        .iter()
        .map(|record| Observation::new(record.timestamp, record.consumption))
        .collect()
}

/// Zips a prediction's parallel arrays into forecast points.
///
/// Confidence intervals are attached by index. When the interval list is
/// missing or shorter than the forecast, the uncovered points carry no
/// bounds; extra intervals are ignored.
pub fn forecast_points(prediction: &PredictionResult) -> Result<Vec<ForecastPoint>> {
    if prediction.timestamps.len() != prediction.values.len() {
        return Err(ComputeError::MalformedPrediction(format!(
            "{} timestamps but {} values",
            prediction.timestamps.len(),
            prediction.values.len()
        )));
    }

    let intervals = prediction.confidence_intervals.as_deref().unwrap_or_default();

    Ok(prediction
        .timestamps
        .iter()
        .zip(&prediction.values)
        .enumerate()
        .map(|(index, (timestamp, value))| {
            let point = ForecastPoint::new(*timestamp, *value);
            match intervals.get(index) {
                Some(interval) => point.with_bounds(interval.lower, interval.upper),
                None => point,
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use common::ConfidenceInterval;

    fn ts(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn prediction(intervals: Option<Vec<ConfidenceInterval>>) -> PredictionResult {
        PredictionResult {
            timestamps: vec![ts(2), ts(3)],
            values: vec![14.0, 15.0],
            model_type: "ARIMA".to_string(),
            confidence_intervals: intervals,
        }
    }

    #[test]
    fn test_observations_from_records() {
        let records = vec![ConsumptionRecord {
            timestamp: ts(0),
            consumption: 33.0,
            unit: "kWh".to_string(),
        }];
        assert_eq!(observations(&records), vec![Observation::new(ts(0), 33.0)]);
    }

    #[test]
    fn test_forecast_points_with_intervals() {
        let points = forecast_points(&prediction(Some(vec![
            ConfidenceInterval { lower: 11.0, upper: 17.0 },
            ConfidenceInterval { lower: 12.0, upper: 18.0 },
        ])))
        .unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0], ForecastPoint::new(ts(2), 14.0).with_bounds(11.0, 17.0));
        assert_eq!(points[1].bounds(), Some((12.0, 18.0)));
    }

    #[test]
    fn test_forecast_points_without_intervals() {
        let points = forecast_points(&prediction(None)).unwrap();
        assert!(points.iter().all(|point| point.bounds().is_none()));
    }

    #[test]
    fn test_short_interval_list_leaves_tail_unbounded() {
        let points = forecast_points(&prediction(Some(vec![ConfidenceInterval {
            lower: 11.0,
            upper: 17.0,
        }])))
        .unwrap();

        assert!(points[0].bounds().is_some());
        assert!(points[1].bounds().is_none());
    }

    #[test]
    fn test_mismatched_arrays_are_rejected() {
        let mut malformed = prediction(None);
        malformed.values.pop();

        let err = forecast_points(&malformed).unwrap_err();
        assert_eq!(
            err,
            ComputeError::MalformedPrediction("2 timestamps but 1 values".to_string())
        );
    }
}
