//! Joins a historical series and a forecast into continuous plot lines.

use common::{ChartPoint, ForecastPoint, Observation, StitchedSeries};

use crate::error::{ComputeError, Result};

/// Stitches `historical` and `forecast` into series ready for a line chart.
///
/// The last historical observation is prepended to the forecast line and to
/// both confidence bands, so the rendered segments meet without a gap. Bands
/// are produced only when every forecast point carries both bounds; an empty
/// forecast therefore never has bands.
///
/// Forecast timestamps are expected to follow the last historical one. This
/// is not checked: overlapping input yields a misleading chart, not an error.
pub fn stitch(historical: &[Observation], forecast: &[ForecastPoint]) -> Result<StitchedSeries> {
    let last = historical.last().ok_or(ComputeError::EmptyInput)?;
    let bridge = ChartPoint::from(last);

    let forecast_line = std::iter::once(bridge)
        .chain(forecast.iter().map(|point| ChartPoint::new(point.timestamp, point.value)))
        .collect();

    let bounds: Option<Vec<(f64, f64)>> = if forecast.is_empty() {
        None
    } else {
        forecast.iter().map(ForecastPoint::bounds).collect()
    };

    let (lower_band, upper_band) = match bounds {
        Some(bounds) => {
            let band = |pick: fn(&(f64, f64)) -> f64| -> Vec<ChartPoint> {
                std::iter::once(bridge)
                    .chain(
                        forecast
                            .iter()
                            .zip(&bounds)
                            .map(|(point, bound)| ChartPoint::new(point.timestamp, pick(bound))),
                    )
                    .collect()
            };
            (band(|bound| bound.0), band(|bound| bound.1))
        }
        None => (Vec::new(), Vec::new()),
    };

    Ok(StitchedSeries {
        historical: historical.iter().map(ChartPoint::from).collect(),
        forecast: forecast_line,
        has_bands: !lower_band.is_empty(),
        lower_band,
        upper_band,
    })
}
