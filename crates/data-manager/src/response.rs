//! Page response the dashboard is assembled from

use crate::parser::{Quote, TimeSeriesResponse};
use serde::{Deserialize, Serialize};
use stock_dashboard_shared::{
    CandlePoint, DailySummary, DashboardResult, ExplanationPayload, MultiHorizonPrediction,
    SingleDayPrediction,
};

/// Daily summary plus its generated explanation, as one wire object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPayload {
    #[serde(flatten)]
    pub summary: DailySummary,
    #[serde(flatten)]
    pub explanation: ExplanationPayload,
}

/// Prediction section of the response
///
/// A dated request answers with a single price; the default request answers
/// with all horizons or an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictionPayload {
    Dated { date_prediction: f64 },
    Horizons(MultiHorizonPrediction),
}

/// The prediction panel a response feeds
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionRoute<'a> {
    Horizons(&'a MultiHorizonPrediction),
    NextDay(SingleDayPrediction),
}

/// Everything one dashboard page renders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockResponse {
    #[serde(default)]
    pub analysis: Option<AnalysisPayload>,
    #[serde(default)]
    pub chart_data: Vec<CandlePoint>,
    #[serde(default)]
    pub prediction: Option<PredictionPayload>,
}

impl StockResponse {
    pub fn from_json(json: &str) -> DashboardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Assemble a page from provider records
    pub fn assemble(
        ticker: &str,
        quote: &Quote,
        series: &TimeSeriesResponse,
        prediction: Option<PredictionPayload>,
    ) -> DashboardResult<Self> {
        let analysis = AnalysisPayload {
            summary: quote.to_summary()?,
            explanation: quote.explanation(ticker)?,
        };
        let chart_data = series.to_points()?;

        log::info!(
            "assembled {} page: {} chart points, prediction {}",
            ticker.to_uppercase(),
            chart_data.len(),
            if prediction.is_some() { "present" } else { "absent" }
        );

        Ok(Self {
            analysis: Some(analysis),
            chart_data,
            prediction,
        })
    }

    /// Route the prediction to its panel
    ///
    /// A dated request answers with the prediction alone, so an error that
    /// arrives without analysis belongs to the next-day panel.
    pub fn prediction_route(&self) -> Option<PredictionRoute<'_>> {
        let route = match self.prediction.as_ref()? {
            PredictionPayload::Dated { date_prediction } => {
                PredictionRoute::NextDay(SingleDayPrediction {
                    predicted_price: Some(*date_prediction),
                    error: None,
                })
            }
            PredictionPayload::Horizons(prediction)
                if self.analysis.is_none() && prediction.error().is_some() =>
            {
                PredictionRoute::NextDay(SingleDayPrediction {
                    predicted_price: None,
                    error: prediction.error.clone(),
                })
            }
            PredictionPayload::Horizons(prediction) => PredictionRoute::Horizons(prediction),
        };
        Some(route)
    }

    pub fn summary(&self) -> Option<&DailySummary> {
        self.analysis.as_ref().map(|a| &a.summary)
    }

    pub fn explanation(&self) -> Option<&ExplanationPayload> {
        self.analysis.as_ref().map(|a| &a.explanation)
    }
}
