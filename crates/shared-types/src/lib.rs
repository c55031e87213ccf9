//! Shared types for the stock dashboard
//!
//! This crate contains the payloads every dashboard panel renders from, the
//! chart option tree handed to the charting library, the price formatting
//! rule and the common error type. Payloads are read-only view-models: the
//! panels never create or mutate them.

use serde::{Deserialize, Serialize};

pub mod chart_config;
pub mod errors;
pub mod format;

pub use chart_config::*;
pub use errors::{DashboardError, DashboardResult, ErrorResponse};
pub use format::{to_fixed, PriceFormat};

/// Free-text analysis shown as a bulleted list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplanationPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl ExplanationPayload {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            explanation: Some(text.into()),
        }
    }

    /// The text, treating an empty string the same as a missing one
    pub fn text(&self) -> Option<&str> {
        self.explanation.as_deref().filter(|text| !text.is_empty())
    }
}

/// One of the fixed future offsets a prediction may exist for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Horizon {
    #[serde(rename = "1-day")]
    OneDay,
    #[serde(rename = "1-week")]
    OneWeek,
    #[serde(rename = "1-month")]
    OneMonth,
    #[serde(rename = "1-year")]
    OneYear,
}

impl Horizon {
    /// Display order of the prediction grid
    pub const ALL: [Horizon; 4] = [
        Horizon::OneDay,
        Horizon::OneWeek,
        Horizon::OneMonth,
        Horizon::OneYear,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Horizon::OneDay => "1-day",
            Horizon::OneWeek => "1-week",
            Horizon::OneMonth => "1-month",
            Horizon::OneYear => "1-year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Horizon::OneDay => "1 Day",
            Horizon::OneWeek => "1 Week",
            Horizon::OneMonth => "1 Month",
            Horizon::OneYear => "1 Year",
        }
    }
}

impl std::fmt::Display for Horizon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Predictions for the four horizons, or an upstream error
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiHorizonPrediction {
    #[serde(rename = "1-day", default, skip_serializing_if = "Option::is_none")]
    pub one_day: Option<f64>,
    #[serde(rename = "1-week", default, skip_serializing_if = "Option::is_none")]
    pub one_week: Option<f64>,
    #[serde(rename = "1-month", default, skip_serializing_if = "Option::is_none")]
    pub one_month: Option<f64>,
    #[serde(rename = "1-year", default, skip_serializing_if = "Option::is_none")]
    pub one_year: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MultiHorizonPrediction {
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn price(&self, horizon: Horizon) -> Option<f64> {
        match horizon {
            Horizon::OneDay => self.one_day,
            Horizon::OneWeek => self.one_week,
            Horizon::OneMonth => self.one_month,
            Horizon::OneYear => self.one_year,
        }
    }

    /// Upstream error, ignoring empty strings
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.is_empty())
    }
}

/// Next-day prediction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleDayPrediction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SingleDayPrediction {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

/// Daily price summary of a ticker
///
/// `current_price == 0.0` is the "not yet loaded" sentinel. A real zero
/// price cannot be told apart from missing data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub change: Option<f64>,
    #[serde(default)]
    pub percent_change: Option<f64>,
    #[serde(default)]
    pub open_price: Option<f64>,
    #[serde(default)]
    pub day_high: Option<f64>,
    #[serde(default)]
    pub day_low: Option<f64>,
    #[serde(default)]
    pub prev_close: Option<f64>,
}

impl DailySummary {
    /// False when the current price is missing or the zero sentinel
    pub fn has_data(&self) -> bool {
        matches!(self.current_price, Some(price) if price != 0.0)
    }
}

/// One OHLC sample of the chart series
///
/// Serialized in the charting library's `{ "x": timestamp, "y": [o, h, l, c] }`
/// form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WirePoint", into = "WirePoint")]
pub struct CandlePoint {
    pub timestamp: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl CandlePoint {
    pub fn new(timestamp: impl Into<String>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            timestamp: timestamp.into(),
            open,
            high,
            low,
            close,
        }
    }
}

#[derive(Serialize, Deserialize)]
struct WirePoint {
    x: String,
    y: [f64; 4],
}

impl From<WirePoint> for CandlePoint {
    fn from(wire: WirePoint) -> Self {
        let [open, high, low, close] = wire.y;
        Self {
            timestamp: wire.x,
            open,
            high,
            low,
            close,
        }
    }
}

impl From<CandlePoint> for WirePoint {
    fn from(point: CandlePoint) -> Self {
        Self {
            x: point.timestamp,
            y: [point.open, point.high, point.low, point.close],
        }
    }
}
