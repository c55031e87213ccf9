//! Configuration system for the stock dashboard
//! Currency formatting, chart theme and panel captions

use serde::{Deserialize, Serialize};
use stock_dashboard_shared::{PriceFormat, ThemeMode};
use thiserror::Error;

pub mod parser;
pub mod validation;

pub use parser::{ConfigFormat, ConfigParser, ConfigSerializer};
pub use validation::ConfigValidator;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level dashboard configuration
///
/// Defaults reproduce the stock dashboard's fixed look, so an empty file is
/// a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub currency: CurrencyConfig,
    pub chart: ChartSettings,
    pub captions: Captions,
}

impl DashboardConfig {
    /// Format for prices shown with a currency symbol
    pub fn price_format(&self) -> PriceFormat {
        PriceFormat::new(self.currency.symbol.clone(), self.currency.decimals)
    }

    /// Format for bare numbers (summary panel, percent changes)
    pub fn number_format(&self) -> PriceFormat {
        PriceFormat::new("", self.currency.decimals)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyConfig {
    pub symbol: String,
    pub decimals: u32,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            decimals: 2,
        }
    }
}

/// Candlestick chart settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub height: u32,
    pub theme: ThemeMode,
    pub animations: bool,
    pub toolbar: bool,
    pub zoom: bool,
    pub title_color: String,
    pub axis_label_color: String,
    pub grid_border_color: String,
    /// Shown instead of the chart when nothing can be drawn
    pub placeholder_text: String,
    /// ES module the charting library is imported from
    pub module_specifier: String,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            height: 350,
            theme: ThemeMode::Dark,
            animations: false,
            toolbar: false,
            zoom: true,
            title_color: "#FFFFFF".to_string(),
            axis_label_color: "#9CA3AF".to_string(),
            grid_border_color: "#4B5563".to_string(),
            placeholder_text: "Loading Chart...".to_string(),
            module_specifier: "apexcharts".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Captions {
    /// Attribution under the next-day prediction
    pub model_caption: String,
}

impl Default for Captions {
    fn default() -> Self {
        Self {
            model_caption: "Based on historical trends from the LSTM model.".to_string(),
        }
    }
}
