//! Dashboard state.
//!
//! Everything the page keeps between events (selected period and model,
//! loaded history, the current prediction, theme, alert banners) lives in a
//! [`Dashboard`] value owned by the caller. Each event is a method call; the
//! renderer reads chart specs or a [`DashboardView`] snapshot afterwards.
//! Network calls stay with the caller: the dashboard builds requests and
//! consumes responses.

use chrono::{Duration, NaiveDateTime, Utc};
use common::{
    Alert, AlertLevel, LoadDataResponse, ModelKind, Observation, Period, PredictRequest,
    PredictResponse, StitchedSeries,
};
use compute::{ComputeError, ConsumptionStats, LatestUsage};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::chart::{self, ChartSpec};
use crate::config::Settings;
use crate::theme::{compute_theme_style, StyleTokens, Theme};

pub const LOAD_DATA_PATH: &str = "/api/load_data";
pub const PREDICT_PATH: &str = "/api/predict";

/// Seconds an alert banner stays on screen.
pub const ALERT_TTL_SECS: i64 = 5;

const LOAD_FAILED: &str = "Failed to load data. Please try again.";
const PREDICTION_FAILED: &str = "Failed to generate prediction. Please try again.";

#[derive(Debug, Clone)]
struct PredictionState {
    stitched: Option<StitchedSeries>,
    loading: bool,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    settings: Settings,
    period: Period,
    model: ModelKind,
    steps: u32,
    theme: Theme,
    observations: Vec<Observation>,
    consumption_loading: bool,
    /// `Some` once a prediction has been requested; the results card stays visible from then on.
    prediction: Option<PredictionState>,
    /// Newest first; expired banners are pruned whenever a new one is raised.
    alerts: Vec<Alert>,
}

impl Dashboard {
    pub fn new(settings: Settings) -> Self {
        Self {
            period: settings.default_period,
            model: settings.default_model,
            steps: settings.forecast_steps.max(1),
            theme: settings.theme,
            settings,
            observations: Vec::new(),
            consumption_loading: false,
            prediction: None,
            alerts: Vec::new(),
        }
    }

    /// Applies a persisted theme preference, ignoring unknown values.
    pub fn with_stored_theme(mut self, stored: Option<&str>) -> Self {
        self.theme = Theme::from_stored(stored, self.settings.theme);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn model(&self) -> ModelKind {
        self.model
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn is_loading(&self) -> bool {
        self.consumption_loading
    }

    pub fn prediction_visible(&self) -> bool {
        self.prediction.is_some()
    }

    pub fn is_predicting(&self) -> bool {
        self.prediction.as_ref().is_some_and(|prediction| prediction.loading)
    }

    pub fn stitched(&self) -> Option<&StitchedSeries> {
        self.prediction
            .as_ref()
            .and_then(|prediction| prediction.stitched.as_ref())
    }

    /// Switches the aggregation period.
    ///
    /// Returns `true` when a prediction is on screen and must be requested
    /// again for the new period (after the data reload). The previous
    /// forecast is dropped so it is never drawn against the new time unit.
    #[instrument(skip(self))]
    pub fn select_period(&mut self, period: Period) -> bool {
        if period != self.period {
            if let Some(prediction) = self.prediction.as_mut() {
                prediction.stitched = None;
            }
        }
        self.period = period;
        self.prediction_visible()
    }

    pub fn select_model(&mut self, model: ModelKind) {
        debug!(%model, "Model selected");
        self.model = model;
    }

    /// Sets the forecast horizon; zero is raised to one step.
    pub fn set_steps(&mut self, steps: u32) {
        self.steps = steps.max(1);
    }

    /// Request path for the current period.
    pub fn load_path(&self) -> String {
        format!("{}?period={}", LOAD_DATA_PATH, self.period)
    }

    /// Marks the consumption chart as loading and returns the path to fetch.
    pub fn begin_load(&mut self) -> String {
        self.consumption_loading = true;
        self.load_path()
    }

    #[instrument(skip(self, response), fields(period = %self.period))]
    pub fn apply_load_response(&mut self, response: LoadDataResponse) {
        self.consumption_loading = false;

        match response.into_result() {
            Ok(records) => {
                self.observations = compute::observations(&records);
                info!(count = self.observations.len(), "Consumption data loaded");

                if let Some(latest) = self.observations.last() {
                    let now = Utc::now().naive_utc();
                    if let Some(alert) =
                        compute::check_alert_threshold(latest.value, self.settings.alert_threshold, now)
                    {
                        self.raise(alert);
                    }
                }
            }
            Err(error) => {
                warn!(%error, "Data API reported a failure");
                self.push_alert(AlertLevel::Danger, format!("Error loading data: {}", error));
            }
        }
    }

    /// The load request never produced a response (network or decode failure).
    pub fn apply_load_failure(&mut self, reason: &str) {
        warn!(reason, "Loading data failed");
        self.consumption_loading = false;
        self.push_alert(AlertLevel::Danger, LOAD_FAILED);
    }

    /// Shows the prediction card in its loading state and returns the request body.
    pub fn begin_prediction(&mut self) -> PredictRequest {
        let stitched = self.prediction.take().and_then(|prediction| prediction.stitched);
        self.prediction = Some(PredictionState {
            stitched,
            loading: true,
        });

        PredictRequest {
            period: self.period,
            model: self.model,
            steps: self.steps,
        }
    }

    #[instrument(skip(self, response), fields(period = %self.period))]
    pub fn apply_prediction_response(&mut self, response: PredictResponse) {
        let outcome = response
            .into_result()
            .map_err(|error| format!("Error generating prediction: {}", error))
            .and_then(|prediction| {
                compute::stitch_prediction(&self.observations, &prediction).map_err(|err| {
                    if err == ComputeError::EmptyInput {
                        err.to_string()
                    } else {
                        format!("Error generating prediction: {}", err)
                    }
                })
            });

        let state = self.prediction.get_or_insert(PredictionState {
            stitched: None,
            loading: false,
        });
        state.loading = false;

        match outcome {
            Ok(stitched) => {
                info!(
                    points = stitched.forecast_len(),
                    has_bands = stitched.has_bands,
                    "Prediction stitched"
                );
                state.stitched = Some(stitched);
            }
            Err(message) => {
                warn!(%message, "Prediction could not be shown");
                state.stitched = None;
                self.push_alert(AlertLevel::Danger, message);
            }
        }
    }

    /// The prediction request never produced a response.
    pub fn apply_prediction_failure(&mut self, reason: &str) {
        warn!(reason, "Prediction request failed");
        if let Some(prediction) = self.prediction.as_mut() {
            prediction.loading = false;
        }
        self.push_alert(AlertLevel::Danger, PREDICTION_FAILED);
    }

    /// Flips the theme and returns the new one, to be persisted by the caller.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        debug!(theme = %self.theme, "Theme toggled");
        self.theme
    }

    pub fn style(&self) -> StyleTokens {
        compute_theme_style(self.theme)
    }

    fn push_alert(&mut self, level: AlertLevel, message: impl Into<String>) {
        self.raise(Alert::new(level, message, Utc::now().naive_utc()));
    }

    /// Shows `alert` on top; an identical banner still on screen is replaced.
    fn raise(&mut self, alert: Alert) {
        self.expire_alerts(alert.timestamp);
        self.alerts
            .retain(|shown| shown.level != alert.level || shown.message != alert.message);
        self.alerts.insert(0, alert);
    }

    /// Drops banners older than [`ALERT_TTL_SECS`] at `now`; returns how many were removed.
    pub fn expire_alerts(&mut self, now: NaiveDateTime) -> usize {
        let before = self.alerts.len();
        self.alerts.retain(|alert| !is_expired(alert, now));
        before - self.alerts.len()
    }

    /// Removes the banner at `index` (0 is the newest).
    pub fn dismiss_alert(&mut self, index: usize) -> Option<Alert> {
        (index < self.alerts.len()).then(|| self.alerts.remove(index))
    }

    pub fn statistics(&self) -> Option<ConsumptionStats> {
        compute::summarize(&self.observations).unwrap_or_else(|err| {
            warn!(%err, "Failed to compute statistics");
            None
        })
    }

    pub fn latest_usage(&self) -> Option<LatestUsage> {
        compute::latest_usage(&self.observations, &self.settings.usage)
    }

    pub fn consumption_chart(&self) -> ChartSpec {
        let spec = chart::consumption_chart(&self.observations, self.period, &self.style().chart);
        if self.consumption_loading { spec.loading() } else { spec }
    }

    /// `None` until a prediction has been requested.
    pub fn prediction_chart(&self) -> Option<ChartSpec> {
        let prediction = self.prediction.as_ref()?;
        let style = self.style();
        let spec = match &prediction.stitched {
            Some(stitched) => chart::prediction_chart(stitched, self.period, &style.chart),
            None => chart::prediction_chart(&StitchedSeries::default(), self.period, &style.chart),
        };
        Some(if prediction.loading { spec.loading() } else { spec })
    }

    /// Snapshot of everything the page displays.
    pub fn view(&self) -> DashboardView {
        DashboardView {
            period: self.period,
            theme: self.theme,
            style: self.style(),
            model_badge: ModelBadge {
                label: self.model.badge_label(),
                class: self.model.badge_class(),
            },
            steps: self.steps,
            statistics: self.statistics().map(StatisticsView::from),
            latest_usage: self.latest_usage().map(LatestUsageView::from),
            consumption_chart: self.consumption_chart(),
            prediction_chart: self.prediction_chart(),
            alerts: {
                let now = Utc::now().naive_utc();
                self.alerts
                    .iter()
                    .filter(|alert| !is_expired(alert, now))
                    .map(AlertView::from)
                    .collect()
            },
        }
    }
}

fn is_expired(alert: &Alert, now: NaiveDateTime) -> bool {
    now - alert.timestamp >= Duration::seconds(ALERT_TTL_SECS)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelBadge {
    pub label: &'static str,
    pub class: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsView {
    pub average: String,
    pub peak: String,
    pub lowest: String,
}

impl From<ConsumptionStats> for StatisticsView {
    fn from(stats: ConsumptionStats) -> Self {
        Self {
            average: stats.average_label(),
            peak: stats.peak_label(),
            lowest: stats.lowest_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestUsageView {
    pub value: String,
    pub progress_class: &'static str,
    pub text_color: &'static str,
}

impl From<LatestUsage> for LatestUsageView {
    fn from(latest: LatestUsage) -> Self {
        Self {
            value: latest.label(),
            progress_class: latest.level.progress_class(),
            text_color: latest.level.text_color(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertView {
    pub level: AlertLevel,
    pub class: String,
    pub message: String,
}

impl From<&Alert> for AlertView {
    fn from(alert: &Alert) -> Self {
        Self {
            level: alert.level,
            class: alert.level.banner_class(),
            message: alert.message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub period: Period,
    pub theme: Theme,
    pub style: StyleTokens,
    pub model_badge: ModelBadge,
    pub steps: u32,
    pub statistics: Option<StatisticsView>,
    pub latest_usage: Option<LatestUsageView>,
    pub consumption_chart: ChartSpec,
    pub prediction_chart: Option<ChartSpec>,
    pub alerts: Vec<AlertView>,
}

impl DashboardView {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
