//! Configuration validation utilities

use crate::{ChartSettings, ConfigError, CurrencyConfig, DashboardConfig, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("hex color pattern is valid")
});

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration
    pub fn validate(config: &DashboardConfig) -> Result<()> {
        Self::validate_currency(&config.currency)?;
        Self::validate_chart(&config.chart)?;
        Ok(())
    }

    fn validate_currency(currency: &CurrencyConfig) -> Result<()> {
        if currency.symbol.is_empty() {
            return Err(ConfigError::Validation(
                "Currency symbol cannot be empty".to_string(),
            ));
        }

        if currency.decimals > 8 {
            return Err(ConfigError::Validation(format!(
                "Invalid decimals: {}. Must be between 0 and 8",
                currency.decimals
            )));
        }

        Ok(())
    }

    fn validate_chart(chart: &ChartSettings) -> Result<()> {
        if chart.height == 0 || chart.height > 4096 {
            return Err(ConfigError::Validation(format!(
                "Invalid chart height: {}. Must be between 1 and 4096",
                chart.height
            )));
        }

        for (field, value) in [
            ("title_color", &chart.title_color),
            ("axis_label_color", &chart.axis_label_color),
            ("grid_border_color", &chart.grid_border_color),
        ] {
            if !HEX_COLOR.is_match(value) {
                return Err(ConfigError::Validation(format!(
                    "Invalid {}: {:?}. Expected #RGB or #RRGGBB",
                    field, value
                )));
            }
        }

        if chart.module_specifier.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Chart module specifier cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
