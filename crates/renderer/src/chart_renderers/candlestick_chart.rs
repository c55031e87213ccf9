//! Candlestick chart options

use super::ChartCapability;
use stock_dashboard_config::DashboardConfig;
use stock_dashboard_shared::{
    AxisLabels, AxisType, CandlePoint, CandleSeries, ChartOptions, ChartSection, ChartType,
    GridOptions, LabelStyle, ThemeOptions, TitleAlign, TitleOptions, TitleStyle, Toggle,
    TooltipOptions, Visibility, XAxisOptions, YAxisOptions,
};

/// Everything the charting library needs for one draw
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartView {
    /// Inert stand-in for contexts that cannot draw
    Placeholder { text: String },
    Chart { spec: ChartSpec },
}

/// Chart title for `ticker`
pub fn chart_title(ticker: &str) -> String {
    format!("{} Stock Price", ticker.to_uppercase())
}

/// Option tree for a candlestick chart of `points`
///
/// The points become the single series unmodified; ordering and gaps are
/// the caller's concern.
pub fn build_chart_options(
    points: &[CandlePoint],
    ticker: &str,
    config: &DashboardConfig,
) -> ChartOptions {
    let chart = &config.chart;
    let axis_labels = || AxisLabels {
        style: LabelStyle {
            colors: chart.axis_label_color.clone(),
        },
    };

    ChartOptions {
        chart: ChartSection {
            chart_type: ChartType::Candlestick,
            height: chart.height,
            animations: Toggle {
                enabled: chart.animations,
            },
            toolbar: Visibility {
                show: chart.toolbar,
            },
            zoom: Toggle {
                enabled: chart.zoom,
            },
        },
        title: TitleOptions {
            text: chart_title(ticker),
            align: TitleAlign::Left,
            style: TitleStyle {
                color: chart.title_color.clone(),
            },
        },
        xaxis: XAxisOptions {
            axis_type: AxisType::Datetime,
            labels: axis_labels(),
        },
        yaxis: YAxisOptions {
            tooltip: Toggle { enabled: true },
            labels: axis_labels(),
        },
        grid: GridOptions {
            border_color: chart.grid_border_color.clone(),
        },
        tooltip: TooltipOptions { theme: chart.theme },
        theme: ThemeOptions { mode: chart.theme },
        series: vec![CandleSeries {
            name: None,
            data: points.to_vec(),
        }],
        y_label_format: config.price_format(),
    }
}

/// Chart view for the given capability
///
/// Without an interactive surface this is always the placeholder and the
/// charting library is never touched.
pub fn render_chart(
    points: &[CandlePoint],
    ticker: &str,
    capability: &ChartCapability,
    config: &DashboardConfig,
) -> ChartView {
    if !capability.is_available() {
        return ChartView::Placeholder {
            text: config.chart.placeholder_text.clone(),
        };
    }

    ChartView::Chart {
        spec: ChartSpec {
            options: build_chart_options(points, ticker, config),
        },
    }
}
