//! Next-day prediction panel

use stock_dashboard_shared::{PriceFormat, SingleDayPrediction};

pub const HEADING: &str = "AI Price Prediction (Next Day)";

/// Price and error are independent; both may be shown at once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionView {
    pub heading: &'static str,
    pub price: Option<String>,
    pub caption: Option<String>,
    pub error: Option<String>,
}

pub fn render_prediction(
    payload: Option<&SingleDayPrediction>,
    format: &PriceFormat,
    caption: &str,
) -> Option<PredictionView> {
    let Some(payload) = payload else {
        log::debug!("next-day prediction panel: no payload, rendering nothing");
        return None;
    };

    let price = payload.predicted_price.map(|p| format.format(p));

    Some(PredictionView {
        heading: HEADING,
        caption: price.as_ref().map(|_| caption.to_string()),
        price,
        error: payload.error().map(str::to_string),
    })
}
