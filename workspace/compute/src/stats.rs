//! Summary statistics for the consumption panel.

use common::Observation;
use polars::prelude::*;
use std::fmt;
use tracing::{debug, instrument};

use crate::error::Result;

/// Average, peak and lowest consumption over a series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsumptionStats {
    pub average: f64,
    pub peak: f64,
    pub lowest: f64,
    pub count: usize,
}

impl ConsumptionStats {
    pub fn average_label(&self) -> String {
        format_kwh(self.average)
    }

    pub fn peak_label(&self) -> String {
        format_kwh(self.peak)
    }

    pub fn lowest_label(&self) -> String {
        format_kwh(self.lowest)
    }
}

impl fmt::Display for ConsumptionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "average {}, peak {}, lowest {}",
            self.average_label(),
            self.peak_label(),
            self.lowest_label()
        )
    }
}

/// Formats an energy value with two decimals, e.g. `12.50 kWh`.
pub fn format_kwh(value: f64) -> String {
    format!("{:.2} kWh", value)
}

/// Computes summary statistics, or `None` when there is nothing to summarize.
#[instrument(skip(observations), fields(count = observations.len()))]
pub fn summarize(observations: &[Observation]) -> Result<Option<ConsumptionStats>> {
    if observations.is_empty() {
        debug!("No observations to summarize");
        return Ok(None);
    }

    let values: Vec<f64> = observations.iter().map(|o| o.value).collect();
    let series = Series::new("consumption".into(), values);

    let (Some(average), Some(peak), Some(lowest)) =
        (series.mean(), series.max::<f64>()?, series.min::<f64>()?)
    else {
        return Ok(None);
    };

    let stats = ConsumptionStats {
        average,
        peak,
        lowest,
        count: observations.len(),
    };
    debug!(%stats, "Computed consumption statistics");
    Ok(Some(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn series(values: &[f64]) -> Vec<Observation> {
        values
            .iter()
            .enumerate()
            .map(|(hour, value)| Observation::new(ts(hour as u32), *value))
            .collect()
    }

    #[test]
    fn test_summarize_known_values() {
        let stats = summarize(&series(&[10.0, 30.0, 20.0, 40.0])).unwrap().unwrap();

        assert_eq!(stats.average, 25.0);
        assert_eq!(stats.peak, 40.0);
        assert_eq!(stats.lowest, 10.0);
        assert_eq!(stats.count, 4);
    }

    #[test]
    fn test_summarize_empty_is_none() {
        assert_eq!(summarize(&[]).unwrap(), None);
    }

    #[test]
    fn test_summarize_single_value() {
        let stats = summarize(&series(&[42.5])).unwrap().unwrap();
        assert_eq!(stats.average, 42.5);
        assert_eq!(stats.peak, 42.5);
        assert_eq!(stats.lowest, 42.5);
    }

    #[test]
    fn test_labels() {
        let stats = summarize(&series(&[1.0, 2.0])).unwrap().unwrap();
        assert_eq!(stats.average_label(), "1.50 kWh");
        assert_eq!(stats.peak_label(), "2.00 kWh");
        assert_eq!(stats.lowest_label(), "1.00 kWh");
        assert_eq!(format_kwh(12.346), "12.35 kWh");
    }
}
