use super::DashboardContext;
use crate::instance_manager::InstanceManager;
use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use stock_dashboard_renderer::{render_chart, ChartView};
use stock_dashboard_shared::CandlePoint;
use yew::prelude::*;

static NEXT_CHART: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq)]
pub struct StockChartProps {
    pub ticker: String,
    #[prop_or_default]
    pub points: Vec<CandlePoint>,
}

/// Element id the chart library draws into
///
/// `instance` keeps two charts of the same ticker on one page apart.
pub fn mount_id(ticker: &str, instance: usize) -> String {
    format!("stock-chart-{}-{instance}", ticker.to_lowercase())
}

/// Drop whatever chart was drawn into `mount_id`
pub(crate) fn release_chart(mount_id: &str) {
    if let Err(err) = InstanceManager::destroy(mount_id) {
        log::warn!("failed to destroy chart in #{mount_id}: {err}");
    }
}

#[function_component(StockChart)]
pub fn stock_chart(props: &StockChartProps) -> Html {
    let context = use_context::<DashboardContext>().unwrap_or_default();
    let instance = *use_state(|| NEXT_CHART.fetch_add(1, Ordering::Relaxed));
    let view = render_chart(&props.points, &props.ticker, &context.chart, &context.config);
    let id = mount_id(&props.ticker, instance);

    // Effects never run while pre-rendering, so the module is only fetched
    // once a real DOM exists
    {
        let capability = context.chart.clone();
        use_effect_with((view.clone(), id.clone()), move |(view, id)| {
            let live = Rc::new(Cell::new(true));

            if let (ChartView::Chart { spec }, Some(module)) = (view, capability.module()) {
                let module = module.clone();
                let spec = spec.clone();
                let id = id.clone();
                let live = live.clone();
                yew::platform::spawn_local(async move {
                    match module.draw(&id, &spec).await {
                        // Torn down while the module was loading
                        Ok(()) if !live.get() => release_chart(&id),
                        Ok(()) => {}
                        Err(err) => log::error!("failed to draw chart: {err}"),
                    }
                });
            }

            let id = id.clone();
            move || {
                live.set(false);
                release_chart(&id);
            }
        });
    }

    match view {
        ChartView::Placeholder { text } => html! {
            <div class="w-full max-w-5xl bg-gray-800 p-4 rounded-lg mb-8">
                <div class="flex items-center justify-center h-[350px] text-gray-500">{ text }</div>
            </div>
        },
        ChartView::Chart { .. } => html! {
            <div class="w-full max-w-5xl bg-gray-800 p-4 rounded-lg mb-8">
                <div id={id}></div>
            </div>
        },
    }
}
