//! Renderer-agnostic chart descriptions.
//!
//! A [`ChartSpec`] carries everything a line-chart renderer needs (points,
//! dataset styling, axis and tooltip colours) as plain data. The renderer
//! owns its chart instances and redraws from a fresh spec.

use common::{ChartPoint, Observation, Period, StitchedSeries, TimeUnit};
use serde::{Serialize, Serializer};

use crate::theme::ChartTokens;

pub const LOADING_TITLE: &str = "Loading data...";

pub const CONSUMPTION_LABEL: &str = "Energy Consumption (kWh)";
pub const HISTORICAL_LABEL: &str = "Historical Data";
pub const PREDICTION_LABEL: &str = "Prediction";
pub const LOWER_BOUND_LABEL: &str = "Lower Bound";
pub const UPPER_BOUND_LABEL: &str = "Upper Bound";

/// Area fill of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    None,
    /// Fill down to the axis origin.
    Origin,
    /// Fill towards the dataset at this index.
    Dataset(usize),
}

impl Serialize for Fill {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Fill::None => serializer.serialize_bool(false),
            Fill::Origin => serializer.serialize_str("origin"),
            Fill::Dataset(index) => serializer.serialize_u64(*index as u64),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSpec {
    pub label: &'static str,
    pub data: Vec<ChartPoint>,
    pub border_color: &'static str,
    pub background_color: &'static str,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<[u32; 2]>,
    pub tension: f64,
    pub fill: Fill,
    pub point_radius: u32,
    pub point_hover_radius: u32,
    pub hidden: bool,
    /// Whether the legend lists this dataset.
    pub in_legend: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSpec {
    pub title: &'static str,
    pub title_color: &'static str,
    pub tick_color: &'static str,
    pub grid_color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<TimeUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_format: Option<&'static str>,
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipSpec {
    pub background_color: &'static str,
    pub title_color: &'static str,
    pub body_color: &'static str,
    pub border_color: &'static str,
    pub border_width: u32,
}

impl From<&ChartTokens> for TooltipSpec {
    fn from(style: &ChartTokens) -> Self {
        Self {
            background_color: style.tooltip_background,
            title_color: style.tooltip_title_color,
            body_color: style.tooltip_body_color,
            border_color: style.tooltip_border_color,
            border_width: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub datasets: Vec<DatasetSpec>,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub tooltip: TooltipSpec,
    pub legend_color: &'static str,
    pub animation_ms: u32,
}

impl ChartSpec {
    /// Loading placeholder: shows the loading title and drops all points.
    pub fn loading(mut self) -> Self {
        self.title = Some(LOADING_TITLE.to_string());
        for dataset in &mut self.datasets {
            dataset.data.clear();
        }
        self
    }

    pub fn is_loading(&self) -> bool {
        self.title.as_deref() == Some(LOADING_TITLE)
    }

    pub fn dataset(&self, label: &str) -> Option<&DatasetSpec> {
        self.datasets.iter().find(|dataset| dataset.label == label)
    }

    /// Labels shown in the legend, in dataset order.
    pub fn legend_labels(&self) -> Vec<&'static str> {
        self.datasets
            .iter()
            .filter(|dataset| dataset.in_legend)
            .map(|dataset| dataset.label)
            .collect()
    }
}

fn time_axis(title: &'static str, period: Period, style: &ChartTokens) -> AxisSpec {
    let unit = period.time_unit();
    AxisSpec {
        title,
        title_color: style.title_color,
        tick_color: style.text_color,
        grid_color: style.grid_color,
        time_unit: Some(unit),
        display_format: Some(unit.display_format()),
        begin_at_zero: false,
    }
}

fn value_axis(title: &'static str, style: &ChartTokens) -> AxisSpec {
    AxisSpec {
        title,
        title_color: style.title_color,
        tick_color: style.text_color,
        grid_color: style.grid_color,
        time_unit: None,
        display_format: None,
        begin_at_zero: true,
    }
}

/// Chart of the loaded consumption series.
pub fn consumption_chart(observations: &[Observation], period: Period, style: &ChartTokens) -> ChartSpec {
    ChartSpec {
        title: None,
        datasets: vec![DatasetSpec {
            label: CONSUMPTION_LABEL,
            data: observations.iter().map(ChartPoint::from).collect(),
            border_color: "rgb(54, 162, 235)",
            background_color: "rgba(54, 162, 235, 0.2)",
            border_width: 2,
            border_dash: None,
            tension: 0.2,
            fill: Fill::Origin,
            point_radius: 2,
            point_hover_radius: 5,
            hidden: false,
            in_legend: true,
        }],
        x_axis: time_axis("Time", period, style),
        y_axis: value_axis(CONSUMPTION_LABEL, style),
        tooltip: TooltipSpec::from(style),
        legend_color: style.text_color,
        animation_ms: 1000,
    }
}

fn bound_dataset(label: &'static str, data: Vec<ChartPoint>, fill: Fill, hidden: bool) -> DatasetSpec {
    DatasetSpec {
        label,
        data,
        border_color: "rgba(255, 99, 132, 0.3)",
        background_color: "rgba(255, 99, 132, 0.1)",
        border_width: 1,
        border_dash: None,
        tension: 0.4,
        fill,
        point_radius: 0,
        point_hover_radius: 0,
        hidden,
        in_legend: false,
    }
}

/// Chart of the history joined to its forecast.
///
/// Dataset order is fixed (historical, prediction, lower, upper) because the
/// band fills reference datasets by index. The bound datasets are hidden when
/// the series has no confidence bands.
pub fn prediction_chart(stitched: &StitchedSeries, period: Period, style: &ChartTokens) -> ChartSpec {
    let hide_bands = !stitched.has_bands;

    ChartSpec {
        title: None,
        datasets: vec![
            DatasetSpec {
                label: HISTORICAL_LABEL,
                data: stitched.historical.clone(),
                border_color: "rgb(75, 192, 192)",
                background_color: "rgba(75, 192, 192, 0.2)",
                border_width: 2,
                border_dash: None,
                tension: 0.3,
                fill: Fill::None,
                point_radius: 2,
                point_hover_radius: 6,
                hidden: false,
                in_legend: true,
            },
            DatasetSpec {
                label: PREDICTION_LABEL,
                data: stitched.forecast.clone(),
                border_color: "rgb(255, 99, 132)",
                background_color: "rgba(255, 99, 132, 0.2)",
                border_width: 3,
                border_dash: Some([6, 6]),
                tension: 0.4,
                fill: Fill::None,
                point_radius: 2,
                point_hover_radius: 6,
                hidden: false,
                in_legend: true,
            },
            bound_dataset(LOWER_BOUND_LABEL, stitched.lower_band.clone(), Fill::Dataset(0), hide_bands),
            bound_dataset(UPPER_BOUND_LABEL, stitched.upper_band.clone(), Fill::Dataset(2), hide_bands),
        ],
        x_axis: time_axis("Future Time Period", period, style),
        y_axis: value_axis("Predicted Energy Usage (kWh)", style),
        tooltip: TooltipSpec::from(style),
        legend_color: style.text_color,
        animation_ms: 1200,
    }
}

/// Tooltip line on the consumption chart.
pub fn consumption_tooltip_label(value: f64) -> String {
    format!("Consumption: {:.2} kWh", value)
}

/// Tooltip line on the prediction chart.
pub fn series_tooltip_label(label: &str, value: f64) -> String {
    format!("{}: {:.2} kWh", label, value)
}
