use super::DashboardContext;
use stock_dashboard_renderer::render_summary;
use stock_dashboard_shared::DailySummary;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StockAnalysisProps {
    #[prop_or_default]
    pub data: Option<DailySummary>,
}

#[function_component(StockAnalysis)]
pub fn stock_analysis(props: &StockAnalysisProps) -> Html {
    let context = use_context::<DashboardContext>().unwrap_or_default();

    let Some(view) = render_summary(props.data.as_ref(), &context.config.number_format()) else {
        return html! {};
    };

    let movement = format!(
        "{} {} ({}%)",
        view.direction.marker(),
        view.change,
        view.percent_change
    );

    html! {
        <div class="w-full max-w-5xl bg-gray-800 p-4 rounded-lg mb-8">
            <div class="flex justify-between items-center mb-4">
                <h2 class="text-2xl font-bold">{ view.heading }</h2>
                <div>
                    <span class="text-3xl font-bold">{ view.current_price }</span>
                    <span class={classes!("ml-4", "text-xl", view.direction.css_class())}>{ movement }</span>
                </div>
            </div>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4 text-sm">
                { for view.stats.into_iter().map(|stat| html! {
                    <div key={stat.label}>
                        <span class="font-semibold text-gray-400">{ format!("{}:", stat.label) }</span>
                        { format!(" {}", stat.value) }
                    </div>
                }) }
            </div>
        </div>
    }
}
