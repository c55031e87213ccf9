use super::{
    AnalysisExplanation, DashboardContext, MultiPredictionPanel, PredictionPanel, StockAnalysis,
    StockChart,
};
use stock_dashboard_data::{PredictionRoute, StockResponse};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub ticker: String,
    pub response: StockResponse,
}

/// Summary, chart, prediction and explanation, top to bottom
#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let response = &props.response;

    let prediction = match response.prediction_route() {
        Some(PredictionRoute::Horizons(prediction)) => html! {
            <MultiPredictionPanel data={prediction.clone()} />
        },
        Some(PredictionRoute::NextDay(prediction)) => html! {
            <PredictionPanel data={Some(prediction)} />
        },
        None => html! {},
    };

    html! {
        <div class="flex flex-col items-center gap-6 w-full">
            <StockAnalysis data={response.summary().cloned()} />
            <StockChart ticker={props.ticker.clone()} points={response.chart_data.clone()} />
            { prediction }
            <AnalysisExplanation data={response.explanation().cloned()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardRootProps {
    pub context: DashboardContext,
    pub ticker: String,
    pub response: StockResponse,
}

/// Dashboard with its context installed
#[function_component(DashboardRoot)]
pub fn dashboard_root(props: &DashboardRootProps) -> Html {
    html! {
        <ContextProvider<DashboardContext> context={props.context.clone()}>
            <Dashboard ticker={props.ticker.clone()} response={props.response.clone()} />
        </ContextProvider<DashboardContext>>
    }
}
