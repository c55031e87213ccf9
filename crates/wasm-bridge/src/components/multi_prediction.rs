use super::DashboardContext;
use stock_dashboard_renderer::{render_multi_prediction, MultiPredictionView};
use stock_dashboard_shared::MultiHorizonPrediction;
use yew::prelude::*;

/// The payload is required; the dashboard only mounts this panel when a
/// horizon prediction exists.
#[derive(Properties, PartialEq)]
pub struct MultiPredictionPanelProps {
    pub data: MultiHorizonPrediction,
}

#[function_component(MultiPredictionPanel)]
pub fn multi_prediction_panel(props: &MultiPredictionPanelProps) -> Html {
    let context = use_context::<DashboardContext>().unwrap_or_default();

    match render_multi_prediction(&props.data, &context.config.price_format()) {
        MultiPredictionView::Error { heading, message } => html! {
            <div class="w-full max-w-5xl bg-gray-800 p-4 rounded-lg">
                <h2 class="text-xl font-bold mb-2">{ heading }</h2>
                <p class="text-center text-yellow-500">{ message }</p>
            </div>
        },
        MultiPredictionView::Horizons { heading, cells, note } => html! {
            <div class="w-full max-w-5xl bg-gray-800 p-4 rounded-lg">
                <h2 class="text-xl font-bold mb-4">{ heading }</h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 text-center">
                    { for cells.into_iter().map(|cell| html! {
                        <div key={cell.horizon.key()} class="bg-gray-700 p-3 rounded-md">
                            <div class="text-sm text-gray-400">{ cell.label }</div>
                            <div class="text-2xl font-bold">{ cell.value }</div>
                        </div>
                    }) }
                </div>
                if let Some(note) = note {
                    <p class="text-center text-xs text-gray-500 mt-4">{ note }</p>
                }
            </div>
        },
    }
}
