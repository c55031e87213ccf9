//! Data layer for the stock dashboard
//!
//! Turns market-data provider records (quotes and daily time series) into
//! the payloads the panels render, plans series queries for a display
//! range, and defines the page response the dashboard is assembled from.
//! Fetching is left to the caller; everything here is a pure transform.

pub mod parser;
pub mod range;
pub mod response;

pub use parser::{Quote, SeriesValue, TimeSeriesResponse};
pub use range::{plan_series_query, DisplayRange, SeriesQuery};
pub use response::{AnalysisPayload, PredictionPayload, PredictionRoute, StockResponse};
