use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::timestamp::iso;

/// Severity of a dashboard alert banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertLevel {
    Info,
    Warning,
    Danger,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Info => "info",
            AlertLevel::Warning => "warning",
            AlertLevel::Danger => "danger",
        }
    }

    /// CSS classes for the dismissible banner element.
    pub fn banner_class(&self) -> String {
        format!("alert alert-{} alert-dismissible fade show alert-container", self.as_str())
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    #[serde(with = "iso")]
    pub timestamp: NaiveDateTime,
}

impl Alert {
    pub fn new(level: AlertLevel, message: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp,
        }
    }
}
