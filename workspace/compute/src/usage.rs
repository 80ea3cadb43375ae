//! Classification of the most recent reading for the "latest usage" gauge.

use common::Observation;
use serde::{Deserialize, Serialize};

/// Consumption levels (kWh) above which the gauge changes colour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageThresholds {
    pub warning: f64,
    pub danger: f64,
}

impl Default for UsageThresholds {
    fn default() -> Self {
        Self {
            warning: 70.0,
            danger: 90.0,
        }
    }
}

impl UsageThresholds {
    /// Strictly-greater comparisons: a reading equal to a threshold stays below it.
    pub fn classify(&self, value: f64) -> UsageLevel {
        if value > self.danger {
            UsageLevel::Critical
        } else if value > self.warning {
            UsageLevel::Elevated
        } else {
            UsageLevel::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageLevel {
    Normal,
    Elevated,
    Critical,
}

impl UsageLevel {
    pub fn progress_class(&self) -> &'static str {
        match self {
            UsageLevel::Normal => "progress-bar bg-success",
            UsageLevel::Elevated => "progress-bar bg-warning",
            UsageLevel::Critical => "progress-bar bg-danger",
        }
    }

    pub fn text_color(&self) -> &'static str {
        match self {
            UsageLevel::Normal => "var(--bs-success)",
            UsageLevel::Elevated => "var(--bs-warning)",
            UsageLevel::Critical => "var(--bs-danger)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatestUsage {
    pub value: f64,
    pub level: UsageLevel,
}

impl LatestUsage {
    pub fn label(&self) -> String {
        format!("{:.2}", self.value)
    }
}

/// Latest reading of the series and its level, `None` for an empty series.
pub fn latest_usage(observations: &[Observation], thresholds: &UsageThresholds) -> Option<LatestUsage> {
    observations.last().map(|last| LatestUsage {
        value: last.value,
        level: thresholds.classify(last.value),
    })
}
