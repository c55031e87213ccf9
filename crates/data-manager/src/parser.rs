//! Provider record parsing
//!
//! The market-data provider sends numbers as JSON strings (`"182.34"`) and
//! sometimes as plain numbers; both are accepted.

use serde::Deserialize;
use stock_dashboard_shared::{
    to_fixed, CandlePoint, DailySummary, DashboardError, DashboardResult, ExplanationPayload,
};

/// A string or number field, kept as text until it is needed
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    fn parse(&self, field: &str) -> DashboardResult<f64> {
        match self {
            RawNumber::Number(value) => Ok(*value),
            RawNumber::Text(text) => text.trim().parse::<f64>().map_err(|e| {
                DashboardError::parse_field(field, format!("{field}: {text:?} is not a number ({e})"))
            }),
        }
    }
}

/// Latest quote for a symbol
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Quote {
    #[serde(default)]
    close: Option<RawNumber>,
    #[serde(default)]
    change: Option<RawNumber>,
    #[serde(default)]
    percent_change: Option<RawNumber>,
    #[serde(default)]
    high: Option<RawNumber>,
    #[serde(default)]
    low: Option<RawNumber>,
    #[serde(default)]
    open: Option<RawNumber>,
    #[serde(default)]
    previous_close: Option<RawNumber>,
}

impl Quote {
    pub fn from_json(json: &str) -> DashboardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Missing fields read as zero, which the summary panel treats as "no data"
    fn field(raw: &Option<RawNumber>, name: &str) -> DashboardResult<f64> {
        raw.as_ref().map_or(Ok(0.0), |value| value.parse(name))
    }

    /// Daily summary for the analysis panel
    pub fn to_summary(&self) -> DashboardResult<DailySummary> {
        Ok(DailySummary {
            current_price: Some(Self::field(&self.close, "close")?),
            change: Some(Self::field(&self.change, "change")?),
            percent_change: Some(Self::field(&self.percent_change, "percent_change")?),
            open_price: Some(Self::field(&self.open, "open")?),
            day_high: Some(Self::field(&self.high, "high")?),
            day_low: Some(Self::field(&self.low, "low")?),
            prev_close: Some(Self::field(&self.previous_close, "previous_close")?),
        })
    }

    /// One-paragraph summary of the day's move
    pub fn explanation(&self, ticker: &str) -> DashboardResult<ExplanationPayload> {
        let close = Self::field(&self.close, "close")?;
        let change = Self::field(&self.change, "change")?;
        let percent = Self::field(&self.percent_change, "percent_change")?;

        Ok(ExplanationPayload::new(format!(
            "{} is currently trading at ${}, a change of {} ({}%) for the day...",
            ticker.to_uppercase(),
            to_fixed(close, 2),
            to_fixed(change, 2),
            to_fixed(percent, 2),
        )))
    }
}

/// One row of a time-series response
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesValue {
    pub datetime: String,
    open: RawNumber,
    high: RawNumber,
    low: RawNumber,
    close: RawNumber,
}

impl SeriesValue {
    fn to_point(&self) -> DashboardResult<CandlePoint> {
        Ok(CandlePoint::new(
            self.datetime.clone(),
            self.open.parse("open")?,
            self.high.parse("high")?,
            self.low.parse("low")?,
            self.close.parse("close")?,
        ))
    }
}

/// Time-series response, newest row first
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeSeriesResponse {
    #[serde(default)]
    pub values: Option<Vec<SeriesValue>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl TimeSeriesResponse {
    pub fn from_json(json: &str) -> DashboardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Chart points, oldest first
    ///
    /// A response without `values` (e.g. a provider error body) yields an
    /// empty series.
    pub fn to_points(&self) -> DashboardResult<Vec<CandlePoint>> {
        let Some(values) = &self.values else {
            log::debug!(
                "time series without values (status: {:?}, message: {:?})",
                self.status,
                self.message
            );
            return Ok(Vec::new());
        };

        values.iter().rev().map(SeriesValue::to_point).collect()
    }
}
