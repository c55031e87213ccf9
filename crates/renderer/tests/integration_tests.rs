//! Integration tests for the dashboard panels

use futures::future::{FutureExt, LocalBoxFuture};
use std::cell::Cell;
use std::rc::Rc;
use stock_dashboard_config::DashboardConfig;
use stock_dashboard_renderer::*;
use stock_dashboard_shared::{
    CandlePoint, DailySummary, DashboardError, DashboardResult, ExplanationPayload,
    MultiHorizonPrediction, SingleDayPrediction,
};

/// Loader that counts how often the charting library is fetched
struct CountingLoader {
    fetches: Rc<Cell<u32>>,
}

impl ChartModuleLoader for CountingLoader {
    fn load(&self) -> LocalBoxFuture<'static, DashboardResult<Rc<dyn ChartBackend>>> {
        self.fetches.set(self.fetches.get() + 1);
        futures::future::ready(Err(DashboardError::ChartLoad {
            message: "not wired in tests".to_string(),
        }))
        .boxed_local()
    }
}

#[test]
fn test_multi_horizon_scenario() {
    let payload: MultiHorizonPrediction =
        serde_json::from_str(r#"{"1-day": 182.345, "1-week": 190.1}"#).unwrap();
    let config = DashboardConfig::default();

    match render_multi_prediction(&payload, &config.price_format()) {
        MultiPredictionView::Horizons { heading, cells, note } => {
            assert_eq!(heading, "AI Price Prediction");
            assert_eq!(cells[0].value, "$182.34");
            assert_eq!(cells[1].value, "$190.10");
            assert_eq!(cells[2].value, "");
            assert_eq!(cells[3].value, "");
            assert!(note.is_none());
        }
        other => panic!("expected horizon cells, got {other:?}"),
    }
}

#[test]
fn test_multi_horizon_error_scenario() {
    let payload: MultiHorizonPrediction =
        serde_json::from_str(r#"{"error": "model unavailable"}"#).unwrap();

    let view = render_multi_prediction(&payload, &DashboardConfig::default().price_format());
    assert!(
        matches!(view, MultiPredictionView::Error { ref message, .. } if message == "model unavailable")
    );
}

#[test]
fn test_absent_payloads_render_nothing() {
    let config = DashboardConfig::default();

    assert!(render_explanation(None).is_none());
    assert!(render_summary(None, &config.number_format()).is_none());
    assert!(render_prediction(None, &config.price_format(), &config.captions.model_caption).is_none());
}

#[test]
fn test_present_but_empty_prediction_is_not_omitted() {
    let config = DashboardConfig::default();
    let view = render_prediction(
        Some(&SingleDayPrediction::default()),
        &config.price_format(),
        &config.captions.model_caption,
    );
    assert!(view.is_some());
}

#[test]
fn test_sentence_round_trip() {
    let sentences = ["Shares rose", "Volume was average", "RSI is neutral"];
    let text = sentences.join(". ");

    let view = render_explanation(Some(&ExplanationPayload::new(text))).unwrap();
    let restored: Vec<String> = sentences.iter().map(|s| format!("{s}.")).collect();
    assert_eq!(view.sentences, restored);
}

#[test]
fn test_summary_with_custom_currency_decimals() {
    let mut config = DashboardConfig::default();
    config.currency.decimals = 3;

    let summary = DailySummary {
        current_price: Some(10.0625),
        change: Some(0.0),
        ..Default::default()
    };
    let view = render_summary(Some(&summary), &config.number_format()).unwrap();

    assert_eq!(view.current_price, "10.063");
    assert_eq!(view.direction, Direction::Up);
    assert_eq!(view.percent_change, "");
}

#[test]
fn test_chart_placeholder_does_not_fetch() {
    let fetches = Rc::new(Cell::new(0));
    let interactive = ChartCapability::available(CountingLoader {
        fetches: fetches.clone(),
    });
    let config = DashboardConfig::default();
    let points = vec![CandlePoint::new("2024-03-01", 1.0, 2.0, 0.5, 1.5)];

    let view = render_chart(&points, "msft", &ChartCapability::Unavailable, &config);
    assert!(matches!(view, ChartView::Placeholder { .. }));

    // Building the interactive view does not fetch either; only drawing does
    let view = render_chart(&points, "msft", &interactive, &config);
    let ChartView::Chart { spec } = view else {
        panic!("expected chart view");
    };
    assert_eq!(spec.options.title.text, "MSFT Stock Price");
    assert_eq!(fetches.get(), 0);

    let module = interactive.module().unwrap();
    assert!(futures::executor::block_on(module.draw("chart", &spec)).is_err());
    assert_eq!(fetches.get(), 1);
}

#[test]
fn test_chart_options_serialize_to_library_schema() {
    let points = vec![CandlePoint::new("2024-03-01", 1.0, 2.0, 0.5, 1.5)];
    let options = build_chart_options(&points, "msft", &DashboardConfig::default());
    let json = serde_json::to_value(&options).unwrap();

    assert_eq!(json["chart"]["type"], "candlestick");
    assert_eq!(json["chart"]["animations"]["enabled"], false);
    assert_eq!(json["chart"]["toolbar"]["show"], false);
    assert_eq!(json["xaxis"]["type"], "datetime");
    assert_eq!(json["grid"]["borderColor"], "#4B5563");
    assert_eq!(json["title"]["align"], "left");
    assert_eq!(json["series"][0]["data"][0]["x"], "2024-03-01");
    assert_eq!(json["series"][0]["data"][0]["y"][3], 1.5);
    assert!(json.get("y_label_format").is_none());
}
