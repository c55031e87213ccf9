use stock_dashboard_renderer::render_explanation;
use stock_dashboard_shared::ExplanationPayload;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnalysisExplanationProps {
    #[prop_or_default]
    pub data: Option<ExplanationPayload>,
}

#[function_component(AnalysisExplanation)]
pub fn analysis_explanation(props: &AnalysisExplanationProps) -> Html {
    let Some(view) = render_explanation(props.data.as_ref()) else {
        return html! {};
    };

    html! {
        <div class="w-full max-w-5xl bg-gray-800 p-4 rounded-lg">
            <h2 class="text-xl font-bold mb-2">{ view.heading }</h2>
            <ul class="list-disc list-inside text-gray-300 space-y-1">
                { for view.sentences.into_iter().enumerate().map(|(index, sentence)| html! {
                    <li key={index.to_string()}>{ sentence }</li>
                }) }
            </ul>
        </div>
    }
}
