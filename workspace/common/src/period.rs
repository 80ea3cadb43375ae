use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::UnknownVariant;

/// Aggregation window selected on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Hourly samples over a day.
    #[default]
    Daily,
    /// Daily samples over a week.
    Weekly,
    /// Weekly samples over a month.
    Monthly,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Daily, Period::Weekly, Period::Monthly];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }

    /// Unit used on the time axis for this period.
    pub fn time_unit(&self) -> TimeUnit {
        match self {
            Period::Daily => TimeUnit::Hour,
            Period::Weekly => TimeUnit::Day,
            Period::Monthly => TimeUnit::Week,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|period| period.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownVariant::new("period", s))
    }
}

/// Time-axis unit understood by the chart renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Hour,
    Day,
    Week,
}

impl TimeUnit {
    /// Tick label format for the renderer's date adapter.
    pub fn display_format(&self) -> &'static str {
        match self {
            TimeUnit::Hour => "HH:mm",
            TimeUnit::Day | TimeUnit::Week => "MMM d",
        }
    }
}

/// Forecasting model requested from the prediction API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    #[default]
    Arima,
    Lstm,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Arima => "arima",
            ModelKind::Lstm => "lstm",
        }
    }

    /// Text shown in the model badge.
    pub fn badge_label(&self) -> &'static str {
        match self {
            ModelKind::Arima => "ARIMA",
            ModelKind::Lstm => "LSTM",
        }
    }

    pub fn badge_class(&self) -> String {
        format!("badge rounded-pill {}", self.as_str())
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "arima" => Ok(ModelKind::Arima),
            "lstm" => Ok(ModelKind::Lstm),
            _ => Err(UnknownVariant::new("model", s)),
        }
    }
}
