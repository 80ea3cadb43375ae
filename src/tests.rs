mod integration_tests {
    use crate::chart::{LOWER_BOUND_LABEL, PREDICTION_LABEL, UPPER_BOUND_LABEL};
    use crate::{Dashboard, LoadDataResponse, Period, PredictResponse, Settings, Theme};

    const LOAD_BODY: &str = r#"{
        "success": true,
        "data": [
            {"timestamp": "2024-01-01T00:00:00", "consumption": 10.0, "unit": "kWh"},
            {"timestamp": "2024-01-01T01:00:00", "consumption": 12.0, "unit": "kWh"}
        ]
    }"#;

    const ARIMA_BODY: &str = r#"{
        "success": true,
        "model": "arima",
        "predictions": {
            "timestamps": ["2024-01-01T02:00:00"],
            "values": [14.0],
            "model_type": "ARIMA",
            "confidence_intervals": [{"lower": 11.0, "upper": 17.0}]
        }
    }"#;

    const LSTM_BODY: &str = r#"{
        "success": true,
        "model": "lstm",
        "predictions": {
            "timestamps": ["2024-01-01T02:00:00", "2024-01-01T03:00:00"],
            "values": [14.0, 15.5],
            "model_type": "LSTM"
        }
    }"#;

    fn loaded_dashboard() -> Dashboard {
        let mut dashboard = Dashboard::new(Settings::default());
        dashboard.begin_load();
        let response: LoadDataResponse = serde_json::from_str(LOAD_BODY).unwrap();
        dashboard.apply_load_response(response);
        dashboard
    }

    #[test]
    fn test_arima_prediction_renders_bands() {
        let mut dashboard = loaded_dashboard();
        dashboard.begin_prediction();
        let response: PredictResponse = serde_json::from_str(ARIMA_BODY).unwrap();
        dashboard.apply_prediction_response(response);

        let view = serde_json::to_value(dashboard.view()).unwrap();
        let chart = &view["predictionChart"];
        assert_eq!(chart["datasets"][1]["label"], PREDICTION_LABEL);
        assert_eq!(
            chart["datasets"][1]["data"],
            serde_json::json!([
                {"x": "2024-01-01T01:00:00", "y": 12.0},
                {"x": "2024-01-01T02:00:00", "y": 14.0}
            ])
        );
        assert_eq!(
            chart["datasets"][2]["data"],
            serde_json::json!([
                {"x": "2024-01-01T01:00:00", "y": 12.0},
                {"x": "2024-01-01T02:00:00", "y": 11.0}
            ])
        );
        assert_eq!(
            chart["datasets"][3]["data"],
            serde_json::json!([
                {"x": "2024-01-01T01:00:00", "y": 12.0},
                {"x": "2024-01-01T02:00:00", "y": 17.0}
            ])
        );
        assert_eq!(chart["datasets"][2]["hidden"], false);
    }

    #[test]
    fn test_lstm_prediction_hides_bands() {
        let mut dashboard = loaded_dashboard();
        dashboard.begin_prediction();
        let response: PredictResponse = serde_json::from_str(LSTM_BODY).unwrap();
        dashboard.apply_prediction_response(response);

        let stitched = dashboard.stitched().unwrap();
        assert!(!stitched.has_bands);
        assert_eq!(stitched.forecast.len(), 3);

        let spec = dashboard.prediction_chart().unwrap();
        assert!(spec.dataset(LOWER_BOUND_LABEL).unwrap().hidden);
        assert!(spec.dataset(UPPER_BOUND_LABEL).unwrap().hidden);
    }

    #[test]
    fn test_view_snapshot_contents() {
        let mut dashboard = loaded_dashboard();
        dashboard.toggle_theme();

        let view = dashboard.view();
        assert_eq!(view.theme, Theme::Dark);
        assert_eq!(view.period, Period::Daily);
        let statistics = view.statistics.as_ref().unwrap();
        assert_eq!(statistics.average, "11.00 kWh");
        assert_eq!(statistics.peak, "12.00 kWh");
        assert_eq!(statistics.lowest, "10.00 kWh");
        assert_eq!(view.latest_usage.as_ref().unwrap().value, "12.00");
        assert!(view.prediction_chart.is_none());
        assert!(view.alerts.is_empty());

        let json = view.to_json().unwrap();
        assert!(json.contains("\"modelBadge\":{\"label\":\"ARIMA\""));
    }

    #[test]
    fn test_period_switch_then_reload_cycle() {
        let mut dashboard = loaded_dashboard();
        dashboard.begin_prediction();
        dashboard.apply_prediction_response(serde_json::from_str(ARIMA_BODY).unwrap());

        let needs_prediction = dashboard.select_period(Period::Weekly);
        assert!(needs_prediction);
        assert_eq!(dashboard.begin_load(), "/api/load_data?period=weekly");
        dashboard.apply_load_response(serde_json::from_str(LOAD_BODY).unwrap());

        let request = dashboard.begin_prediction();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"period": "weekly", "model": "arima", "steps": 10})
        );
        assert_eq!(dashboard.consumption_chart().x_axis.time_unit, Some(common::TimeUnit::Day));
    }
}
