//! Multi-horizon prediction panel
//!
//! The payload is required here; callers must not invoke this panel without
//! one.

use stock_dashboard_shared::{Horizon, MultiHorizonPrediction, PriceFormat};

pub const HEADING: &str = "AI Price Prediction";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HorizonCell {
    pub horizon: Horizon,
    pub label: &'static str,
    /// Empty when the horizon has no prediction
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiPredictionView {
    /// Upstream error; no cells are shown
    Error { heading: &'static str, message: String },
    Horizons {
        heading: &'static str,
        cells: [HorizonCell; 4],
        note: Option<String>,
    },
}

pub fn render_multi_prediction(
    payload: &MultiHorizonPrediction,
    format: &PriceFormat,
) -> MultiPredictionView {
    if let Some(message) = payload.error() {
        log::debug!("prediction panel: upstream error {message:?}");
        return MultiPredictionView::Error {
            heading: HEADING,
            message: message.to_string(),
        };
    }

    let cells = Horizon::ALL.map(|horizon| HorizonCell {
        horizon,
        label: horizon.label(),
        value: format.display(payload.price(horizon)),
    });

    MultiPredictionView::Horizons {
        heading: HEADING,
        cells,
        note: payload.note().map(str::to_string),
    }
}
