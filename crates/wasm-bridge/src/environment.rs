//! Execution environment detection

use once_cell::unsync::OnceCell;
use stock_dashboard_config::DashboardConfig;
use stock_dashboard_renderer::ChartCapability;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// A browser window with a DOM to draw into
    Interactive,
    /// Pre-render or any context without a window
    NonInteractive,
}

impl Environment {
    pub fn detect() -> Self {
        cfg_if::cfg_if! {
            if #[cfg(target_arch = "wasm32")] {
                if web_sys::window().is_some() {
                    Environment::Interactive
                } else {
                    Environment::NonInteractive
                }
            } else {
                Environment::NonInteractive
            }
        }
    }
}

thread_local! {
    static CAPABILITY: OnceCell<ChartCapability> = OnceCell::new();
}

/// Chart capability for this thread, decided on first call
///
/// Every dashboard mounted on the page shares the same lazily-loaded chart
/// module, so the library is fetched at most once. The module specifier of
/// the first caller's config wins.
pub fn chart_capability(config: &DashboardConfig) -> ChartCapability {
    CAPABILITY.with(|cell| cell.get_or_init(|| capability_for(Environment::detect(), config)).clone())
}

fn capability_for(environment: Environment, config: &DashboardConfig) -> ChartCapability {
    log::info!("chart environment: {environment:?}");

    match environment {
        Environment::NonInteractive => ChartCapability::Unavailable,
        Environment::Interactive => interactive_capability(config),
    }
}

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        fn interactive_capability(config: &DashboardConfig) -> ChartCapability {
            ChartCapability::available(crate::apexcharts::ApexChartsLoader::new(
                config.chart.module_specifier.clone(),
            ))
        }
    } else {
        fn interactive_capability(_config: &DashboardConfig) -> ChartCapability {
            ChartCapability::Unavailable
        }
    }
}
