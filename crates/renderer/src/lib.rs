//! View layer of the stock dashboard
//!
//! Each panel is a pure function from an optional payload to an optional
//! view. `None` is the explicit empty render: the caller draws nothing. No
//! panel fails on missing data; the worst case is an empty panel.
//!
//! The candlestick chart is the one panel that touches the environment. It
//! takes a [`ChartCapability`] decided once by the caller and falls back to
//! an inert placeholder when no interactive surface exists.

pub mod chart_renderers;
pub mod panels;

pub use chart_renderers::{
    build_chart_options, render_chart, ChartBackend, ChartCapability, ChartModuleLoader, ChartSpec,
    ChartView, LazyChartModule,
};
pub use panels::{
    explanation::{render_explanation, split_sentences, ExplanationView},
    multi_prediction::{render_multi_prediction, HorizonCell, MultiPredictionView},
    prediction::{render_prediction, PredictionView},
    stock_analysis::{render_summary, Direction, StatCell, SummaryView},
};
