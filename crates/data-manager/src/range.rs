//! Display range to series query planning

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};
use stock_dashboard_shared::{DashboardError, DashboardResult};

/// Points requested when the range is a bare sampling interval
pub const DEFAULT_OUTPUT_SIZE: u32 = 100;

/// What the user picked in the range selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayRange {
    OneMonth,
    OneYear,
    FiveYears,
    /// A provider sampling interval such as `1day` or `1h`
    Interval(String),
}

impl DisplayRange {
    pub fn parse(range: &str) -> DashboardResult<Self> {
        match range.trim() {
            "1month" => Ok(DisplayRange::OneMonth),
            "1year" => Ok(DisplayRange::OneYear),
            "5years" => Ok(DisplayRange::FiveYears),
            "" => Err(DashboardError::UnsupportedRange {
                range: range.to_string(),
            }),
            other => Ok(DisplayRange::Interval(other.to_string())),
        }
    }

    /// Calendar span covered, for the dated ranges
    fn span(&self) -> Option<Months> {
        match self {
            DisplayRange::OneMonth => Some(Months::new(1)),
            DisplayRange::OneYear => Some(Months::new(12)),
            DisplayRange::FiveYears => Some(Months::new(60)),
            DisplayRange::Interval(_) => None,
        }
    }

    fn sampling_interval(&self) -> &str {
        match self {
            DisplayRange::OneMonth | DisplayRange::OneYear => "1day",
            DisplayRange::FiveYears => "1week",
            DisplayRange::Interval(interval) => interval,
        }
    }
}

/// Parameters of a time-series request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesQuery {
    pub symbol: String,
    pub interval: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "outputsize", skip_serializing_if = "Option::is_none")]
    pub output_size: Option<u32>,
}

/// Plan the series request for `range`, ending on `today`
pub fn plan_series_query(symbol: &str, range: &str, today: NaiveDate) -> DashboardResult<SeriesQuery> {
    let range = DisplayRange::parse(range)?;
    let symbol = symbol.to_uppercase();
    let interval = range.sampling_interval().to_string();

    let query = match range.span() {
        Some(span) => {
            let start = today
                .checked_sub_months(span)
                .ok_or_else(|| DashboardError::UnsupportedRange {
                    range: format!("{range:?} before {today}"),
                })?;
            SeriesQuery {
                symbol,
                interval,
                start_date: Some(start),
                end_date: Some(today),
                output_size: None,
            }
        }
        None => SeriesQuery {
            symbol,
            interval,
            start_date: None,
            end_date: None,
            output_size: Some(DEFAULT_OUTPUT_SIZE),
        },
    };

    log::debug!("planned series query {query:?}");
    Ok(query)
}
