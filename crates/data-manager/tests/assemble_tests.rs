//! Page assembly from provider records

use stock_dashboard_data::{PredictionPayload, Quote, StockResponse, TimeSeriesResponse};
use stock_dashboard_shared::MultiHorizonPrediction;

const QUOTE: &str = r#"{
    "symbol": "NVDA", "close": "875.28", "change": "12.5", "percent_change": "1.4489",
    "high": "880.00", "low": "860.10", "open": "862.00", "previous_close": "862.78"
}"#;

const SERIES: &str = r#"{
    "values": [
        {"datetime": "2024-03-08", "open": "870", "high": "880", "low": "860.1", "close": "875.28"},
        {"datetime": "2024-03-07", "open": "850", "high": "866", "low": "845", "close": "862.78"},
        {"datetime": "2024-03-06", "open": "840", "high": "855", "low": "835", "close": "850"}
    ],
    "status": "ok"
}"#;

#[test]
fn test_assemble_page() {
    let quote = Quote::from_json(QUOTE).unwrap();
    let series = TimeSeriesResponse::from_json(SERIES).unwrap();
    let prediction = PredictionPayload::Horizons(MultiHorizonPrediction::failed(
        "Not enough recent data for prediction.",
    ));

    let page = StockResponse::assemble("nvda", &quote, &series, Some(prediction)).unwrap();

    let summary = page.summary().unwrap();
    assert_eq!(summary.current_price, Some(875.28));
    assert_eq!(summary.prev_close, Some(862.78));

    assert_eq!(
        page.explanation().unwrap().text(),
        Some("NVDA is currently trading at $875.28, a change of 12.50 (1.45%) for the day...")
    );

    let dates: Vec<&str> = page.chart_data.iter().map(|p| p.timestamp.as_str()).collect();
    assert_eq!(dates, ["2024-03-06", "2024-03-07", "2024-03-08"]);
}

#[test]
fn test_assembled_page_survives_wire_round_trip() {
    let quote = Quote::from_json(QUOTE).unwrap();
    let series = TimeSeriesResponse::from_json(SERIES).unwrap();
    let page = StockResponse::assemble("nvda", &quote, &series, None).unwrap();

    let json = serde_json::to_string(&page).unwrap();
    assert!(json.contains("\"chartData\""));
    assert!(json.contains("\"currentPrice\":875.28"));

    assert_eq!(StockResponse::from_json(&json).unwrap(), page);
}

#[test]
fn test_bad_series_row_fails_assembly() {
    let quote = Quote::from_json(QUOTE).unwrap();
    let series = TimeSeriesResponse::from_json(
        r#"{"values": [{"datetime": "2024-03-08", "open": "x", "high": "1", "low": "1", "close": "1"}]}"#,
    )
    .unwrap();

    assert!(StockResponse::assemble("nvda", &quote, &series, None).is_err());
}
