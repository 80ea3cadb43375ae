//! Energy consumption dashboard core.
//!
//! Turns data/prediction API payloads into renderer-ready chart specs:
//! historical and forecast series stitched into continuous lines with
//! confidence bands, summary statistics, threshold alerts and light/dark
//! style tokens. Drawing, DOM wiring and networking belong to the caller.

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod telemetry;
pub mod theme;

#[cfg(test)]
mod tests;

pub use chart::{consumption_chart, prediction_chart, ChartSpec};
pub use config::Settings;
pub use dashboard::{Dashboard, DashboardView};
pub use theme::{compute_theme_style, StyleTokens, Theme};

pub use common::{
    ChartPoint, ForecastPoint, LoadDataResponse, ModelKind, Observation, Period, PredictRequest,
    PredictResponse, StitchedSeries,
};
pub use compute::{stitch, ComputeError};
