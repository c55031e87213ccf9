//! Dashboard components
//!
//! Thin yew wrappers over the renderer's view builders. A builder returning
//! `None` renders as an empty node.

use std::rc::Rc;
use stock_dashboard_config::DashboardConfig;
use stock_dashboard_renderer::ChartCapability;

pub mod dashboard;
pub mod explanation;
pub mod multi_prediction;
pub mod prediction;
pub mod stock_analysis;
pub mod stock_chart;

pub use dashboard::{Dashboard, DashboardRoot, DashboardRootProps};
pub use explanation::AnalysisExplanation;
pub use multi_prediction::MultiPredictionPanel;
pub use prediction::PredictionPanel;
pub use stock_analysis::StockAnalysis;
pub use stock_chart::StockChart;

/// Shared by every component under a dashboard root
///
/// Components rendered without a provider fall back to the default config
/// and no chart capability.
#[derive(Clone, Default, PartialEq)]
pub struct DashboardContext {
    pub config: Rc<DashboardConfig>,
    pub chart: ChartCapability,
}

impl DashboardContext {
    pub fn new(config: DashboardConfig, chart: ChartCapability) -> Self {
        Self {
            config: Rc::new(config),
            chart,
        }
    }

    /// Context for pre-rendering: the chart always shows its placeholder
    pub fn non_interactive(config: DashboardConfig) -> Self {
        Self::new(config, ChartCapability::Unavailable)
    }
}
