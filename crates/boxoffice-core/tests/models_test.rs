use boxoffice_core::constants::FEATURE_COLUMNS;
use boxoffice_core::models::*;
use serde_json::json;

#[test]
fn request_maps_onto_trained_columns() {
    let req = PredictionRequest::from_json(&json!({
        "year": 2019,
        "rating": 7.4,
        "genre": "Drama",
        "run_time": 121,
        "budget": 1_000_000
    }))
    .unwrap();
    let row = req.to_feature_row().unwrap();

    assert_eq!(row.column_names(), FEATURE_COLUMNS.to_vec());
    assert_eq!(row.number("year"), Some(2019.0));
    assert_eq!(row.number("rating"), Some(7.4));
    assert_eq!(row.text("genres"), Some("Drama"));
    assert_eq!(row.number("run_time_minutes"), Some(121.0));
    assert_eq!(row.number("budget"), Some(1_000_000.0));
    assert!(row.get("genre").is_none());
}

#[test]
fn missing_fields_stay_missing_in_row() {
    let row = PredictionRequest::from_json(&json!({"genre": "Comedy"}))
        .unwrap()
        .to_feature_row()
        .unwrap();
    assert_eq!(row.len(), 5);
    assert!(row.get("year").unwrap().is_missing());
    assert!(row.get("budget").unwrap().is_missing());
}

#[test]
fn non_object_body_is_rejected() {
    let err = PredictionRequest::from_json(&json!([1, 2, 3])).unwrap_err();
    assert!(err.to_string().contains("array"));
}

#[test]
fn structured_field_values_are_rejected() {
    let err = PredictionRequest::from_json(&json!({"rating": {"imdb": 7}})).unwrap_err();
    assert!(err.to_string().contains("rating"));

    let err = PredictionRequest::from_json(&json!({"year": true})).unwrap_err();
    assert!(err.to_string().contains("boolean"));
}

#[test]
fn non_numeric_budget_fails_row_construction() {
    let err = PredictionRequest::from_json(&json!({"budget": "lots"}))
        .unwrap()
        .to_feature_row()
        .unwrap_err();
    assert!(err.is_client_error());
    assert!(err.to_string().contains("budget"));
}

#[test]
fn forecast_profit_case() {
    let forecast = Forecast::new(1_500_000.0, 1_000_000.0);
    assert_eq!(forecast.status, ProfitStatus::Profit);
    assert_eq!(forecast.margin, 500_000.0);
    assert_eq!(
        forecast.to_result(),
        PredictionResult {
            predicted_revenue: "1,500,000.00".into(),
            status: ProfitStatus::Profit,
            profit_loss: "500,000.00".into(),
        }
    );
}

#[test]
fn forecast_loss_case_reports_absolute_margin() {
    let result = Forecast::new(1_200_000.0, 2_000_000.0).to_result();
    assert_eq!(result.predicted_revenue, "1,200,000.00");
    assert_eq!(result.status, ProfitStatus::Loss);
    assert_eq!(result.profit_loss, "800,000.00");
}

#[test]
fn break_even_is_profit() {
    assert_eq!(Forecast::new(10.0, 10.0).status, ProfitStatus::Profit);
}

#[test]
fn result_serializes_to_wire_shape() {
    let value = serde_json::to_value(Forecast::new(1_200_000.0, 2_000_000.0).to_result()).unwrap();
    assert_eq!(
        value,
        json!({
            "predicted_revenue": "1,200,000.00",
            "status": "Loss",
            "profit_loss": "800,000.00"
        })
    );
}
