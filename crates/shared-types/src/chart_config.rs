//! Chart option tree handed to the charting library
//!
//! Field names follow the library's camelCase option schema so the tree can
//! be serialized straight into its constructor. The y-axis label formatter
//! is a function on the JS side and is carried here as a [`PriceFormat`].

use crate::{CandlePoint, PriceFormat};
use serde::{Deserialize, Serialize};

/// Chart types the dashboard draws
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Candlestick,
}

/// Light or dark palette
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

/// Horizontal axis scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Datetime,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TitleAlign {
    Left,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Toggle {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Visibility {
    pub show: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSection {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub height: u32,
    pub animations: Toggle,
    pub toolbar: Visibility,
    pub zoom: Toggle,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TitleStyle {
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TitleOptions {
    pub text: String,
    pub align: TitleAlign,
    pub style: TitleStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabelStyle {
    pub colors: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisLabels {
    pub style: LabelStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct XAxisOptions {
    #[serde(rename = "type")]
    pub axis_type: AxisType,
    pub labels: AxisLabels,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YAxisOptions {
    pub tooltip: Toggle,
    pub labels: AxisLabels,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    pub border_color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TooltipOptions {
    pub theme: ThemeMode,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeOptions {
    pub mode: ThemeMode,
}

/// A named data series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandleSeries {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub data: Vec<CandlePoint>,
}

/// Complete option tree for one chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartOptions {
    pub chart: ChartSection,
    pub title: TitleOptions,
    pub xaxis: XAxisOptions,
    pub yaxis: YAxisOptions,
    pub grid: GridOptions,
    pub tooltip: TooltipOptions,
    pub theme: ThemeOptions,
    pub series: Vec<CandleSeries>,
    /// Applied to y-axis tick labels and the hover tooltip
    #[serde(skip)]
    pub y_label_format: PriceFormat,
}

impl ChartOptions {
    /// Text of a y-axis tick for `value`
    pub fn y_label(&self, value: f64) -> String {
        self.y_label_format.format(value)
    }
}
