//! Browser bridge for the stock dashboard
//!
//! Mounts the yew dashboard into a host page, or pre-renders it to markup.
//! The chart capability is decided once per thread from the environment.

use stock_dashboard_config::{ConfigFormat, ConfigParser, ConfigValidator, DashboardConfig};
use stock_dashboard_data::StockResponse;
use stock_dashboard_shared::{DashboardError, DashboardResult};

pub mod components;
pub mod environment;

#[cfg(target_arch = "wasm32")]
mod apexcharts;
#[cfg(target_arch = "wasm32")]
mod bindings;
mod instance_manager;

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_test_support;

pub use components::{DashboardContext, DashboardRoot, DashboardRootProps};
pub use environment::{chart_capability, Environment};

/// Set up logging and the panic hook; safe to call repeatedly
pub fn init_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        cfg_if::cfg_if! {
            if #[cfg(target_arch = "wasm32")] {
                console_error_panic_hook::set_once();
                // A host page may have installed a logger already
                let _ = console_log::init_with_level(log::Level::Info);
            }
        }
        log::info!("stock dashboard bridge initialized");
    });
}

/// Dashboard config from an optional JSON document, validated
pub fn load_config(config_json: Option<&str>) -> DashboardResult<DashboardConfig> {
    let Some(json) = config_json else {
        return Ok(DashboardConfig::default());
    };

    let config = ConfigParser::parse_string(json, ConfigFormat::Json)
        .and_then(|config| ConfigValidator::validate(&config).map(|_| config))
        .map_err(|err| DashboardError::InvalidConfig {
            message: err.to_string(),
        })?;
    Ok(config)
}

/// Markup for the non-interactive dashboard
///
/// The chart renders as its placeholder and the chart library is never
/// requested.
pub async fn render_html(ticker: String, response: StockResponse, config: DashboardConfig) -> String {
    yew::ServerRenderer::<DashboardRoot>::with_props(move || DashboardRootProps {
        context: DashboardContext::non_interactive(config),
        ticker,
        response,
    })
    .hydratable(false)
    .render()
    .await
}
