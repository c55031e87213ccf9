//! Daily price summary panel

use stock_dashboard_shared::{DailySummary, PriceFormat};

pub const HEADING: &str = "Analysis";

/// Direction of the day's move, from the sign of `change`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Non-negative (including `-0.0`) is up; negative, missing or NaN is down
    pub fn from_change(change: Option<f64>) -> Self {
        match change {
            Some(value) if value >= 0.0 => Direction::Up,
            _ => Direction::Down,
        }
    }

    pub fn marker(&self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
        }
    }

    /// Affirmative or alert text colour
    pub fn css_class(&self) -> &'static str {
        match self {
            Direction::Up => "text-green-500",
            Direction::Down => "text-red-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCell {
    pub label: &'static str,
    /// Empty when the field is missing
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub heading: &'static str,
    pub current_price: String,
    pub direction: Direction,
    pub change: String,
    pub percent_change: String,
    /// Open, day high, day low, previous close
    pub stats: [StatCell; 4],
}

/// Nothing is rendered for a missing payload or the zero-price sentinel
pub fn render_summary(payload: Option<&DailySummary>, format: &PriceFormat) -> Option<SummaryView> {
    let summary = payload.filter(|s| s.has_data());
    let Some(summary) = summary else {
        log::debug!("summary panel: no current price, rendering nothing");
        return None;
    };

    let stat = |label: &'static str, value: Option<f64>| StatCell {
        label,
        value: format.display(value),
    };

    Some(SummaryView {
        heading: HEADING,
        current_price: format.display(summary.current_price),
        direction: Direction::from_change(summary.change),
        change: format.display(summary.change),
        percent_change: format.display(summary.percent_change),
        stats: [
            stat("Open", summary.open_price),
            stat("Day High", summary.day_high),
            stat("Day Low", summary.day_low),
            stat("Prev. Close", summary.prev_close),
        ],
    })
}
