use super::DashboardContext;
use stock_dashboard_renderer::render_prediction;
use stock_dashboard_shared::SingleDayPrediction;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PredictionPanelProps {
    #[prop_or_default]
    pub data: Option<SingleDayPrediction>,
}

#[function_component(PredictionPanel)]
pub fn prediction_panel(props: &PredictionPanelProps) -> Html {
    let context = use_context::<DashboardContext>().unwrap_or_default();
    let config = &context.config;

    let Some(view) = render_prediction(
        props.data.as_ref(),
        &config.price_format(),
        &config.captions.model_caption,
    ) else {
        return html! {};
    };

    html! {
        <div class="w-full max-w-5xl bg-gray-800 p-4 rounded-lg text-center">
            <h2 class="text-lg font-semibold text-gray-400 mb-2">{ view.heading }</h2>
            if let Some(price) = view.price {
                <p class="text-4xl font-bold text-cyan-400">{ price }</p>
            }
            if let Some(caption) = view.caption {
                <p class="text-xs text-gray-500 mt-1">{ caption }</p>
            }
            if let Some(error) = view.error {
                <p class="text-md text-amber-500">{ error }</p>
            }
        </div>
    }
}
