use anyhow::{ensure, Context, Result};
use common::{ModelKind, Period, DEFAULT_FORECAST_STEPS};
use compute::{UsageThresholds, DEFAULT_ALERT_THRESHOLD};
use ::config::builder::DefaultState;
use ::config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use tracing::info;

use crate::theme::Theme;

/// Optional settings file, looked up as `energyviz.toml`, `.yaml`, `.json`, ...
pub const CONFIG_FILE_STEM: &str = "energyviz";

/// Environment variables are read as `ENERGYVIZ_<KEY>`, nested keys joined by `__`.
pub const ENV_PREFIX: &str = "ENERGYVIZ";

/// Dashboard settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Consumption (kWh) above which a threshold alert is raised
    pub alert_threshold: f64,

    /// Levels at which the latest-usage gauge changes colour
    pub usage: UsageThresholds,

    /// Period selected when the dashboard opens
    pub default_period: Period,

    /// Model selected when the dashboard opens
    pub default_model: ModelKind,

    /// Number of forecast steps requested by default
    pub forecast_steps: u32,

    /// Theme used when no preference has been stored
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alert_threshold: DEFAULT_ALERT_THRESHOLD,
            usage: UsageThresholds::default(),
            default_period: Period::default(),
            default_model: ModelKind::default(),
            forecast_steps: DEFAULT_FORECAST_STEPS,
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Load settings from `.env`, the optional settings file and the environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE_STEM).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    /// Build settings from an already assembled set of sources.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings: Settings = builder
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Failed to deserialize settings")?;

        settings.validate()?;
        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        ensure!(
            self.alert_threshold > 0.0,
            "alert_threshold must be positive, got {}",
            self.alert_threshold
        );
        ensure!(
            self.usage.warning <= self.usage.danger,
            "usage.warning ({}) must not exceed usage.danger ({})",
            self.usage.warning,
            self.usage.danger
        );
        ensure!(self.forecast_steps > 0, "forecast_steps must be at least 1");
        Ok(())
    }
}
