use chrono::NaiveDateTime;
use common::{Alert, AlertLevel};
use tracing::{debug, instrument};

/// Default high-consumption alert threshold in kWh.
pub const DEFAULT_ALERT_THRESHOLD: f64 = 90.0;

/// Checks whether `consumption` exceeds `threshold`.
///
/// The alert level depends on how far above the threshold the reading is:
/// more than 30% is `Danger`, more than 10% is `Warning`, anything else that
/// still exceeds the threshold is `Info`. A reading exactly 10% or 30% over
/// stays at the lower level.
#[instrument]
pub fn check_alert_threshold(consumption: f64, threshold: f64, at: NaiveDateTime) -> Option<Alert> {
    if consumption <= threshold {
        return None;
    }

    let percentage_over = (consumption - threshold) / threshold * 100.0;
    let (level, message) = if percentage_over > 30.0 {
        (
            AlertLevel::Danger,
            format!("Critical: Energy consumption is {:.1}% above threshold!", percentage_over),
        )
    } else if percentage_over > 10.0 {
        (
            AlertLevel::Warning,
            format!("Warning: Energy consumption is {:.1}% above threshold.", percentage_over),
        )
    } else {
        (
            AlertLevel::Info,
            format!("Notice: Energy consumption has exceeded threshold by {:.1}%.", percentage_over),
        )
    };

    debug!(%level, percentage_over, "Consumption above threshold");
    Some(Alert::new(level, message, at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_below_or_at_threshold() {
        assert_eq!(check_alert_threshold(50.0, DEFAULT_ALERT_THRESHOLD, now()), None);
        assert_eq!(check_alert_threshold(90.0, DEFAULT_ALERT_THRESHOLD, now()), None);
    }

    #[test]
    fn test_notice_level() {
        let alert = check_alert_threshold(95.0, DEFAULT_ALERT_THRESHOLD, now()).unwrap();
        assert_eq!(alert.level, AlertLevel::Info);
        assert_eq!(alert.message, "Notice: Energy consumption has exceeded threshold by 5.6%.");
        assert_eq!(alert.timestamp, now());
    }

    #[test]
    fn test_warning_level() {
        let alert = check_alert_threshold(100.0, DEFAULT_ALERT_THRESHOLD, now()).unwrap();
        assert_eq!(alert.level, AlertLevel::Warning);
        assert_eq!(alert.message, "Warning: Energy consumption is 11.1% above threshold.");
    }

    #[test]
    fn test_danger_level() {
        let alert = check_alert_threshold(120.0, DEFAULT_ALERT_THRESHOLD, now()).unwrap();
        assert_eq!(alert.level, AlertLevel::Danger);
        assert_eq!(alert.message, "Critical: Energy consumption is 33.3% above threshold!");
    }

    #[test]
    fn test_exactly_ten_percent_is_notice() {
        let alert = check_alert_threshold(99.0, DEFAULT_ALERT_THRESHOLD, now()).unwrap();
        assert_eq!(alert.level, AlertLevel::Info);
        assert_eq!(alert.message, "Notice: Energy consumption has exceeded threshold by 10.0%.");

        let above = check_alert_threshold(99.5, DEFAULT_ALERT_THRESHOLD, now()).unwrap();
        assert_eq!(above.level, AlertLevel::Warning);
        assert_eq!(above.message, "Warning: Energy consumption is 10.6% above threshold.");
    }

    #[test]
    fn test_exactly_thirty_percent_is_warning() {
        let alert = check_alert_threshold(117.0, DEFAULT_ALERT_THRESHOLD, now()).unwrap();
        assert_eq!(alert.level, AlertLevel::Warning);
        assert_eq!(alert.message, "Warning: Energy consumption is 30.0% above threshold.");

        let above = check_alert_threshold(117.5, DEFAULT_ALERT_THRESHOLD, now()).unwrap();
        assert_eq!(above.level, AlertLevel::Danger);
        assert_eq!(above.message, "Critical: Energy consumption is 30.6% above threshold!");
    }
}
