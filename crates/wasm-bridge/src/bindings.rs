//! JavaScript entry points

use crate::components::{DashboardContext, DashboardRoot, DashboardRootProps};
use crate::{chart_capability, init_logging, load_config, render_html};
use stock_dashboard_data::StockResponse;
use stock_dashboard_shared::{DashboardError, ErrorResponse};
use wasm_bindgen::prelude::*;
use yew::AppHandle;

fn to_js_error(error: DashboardError, operation: &str) -> JsValue {
    log::error!("{operation} failed: {error}");
    JsValue::from_str(
        &ErrorResponse::new(error)
            .with_context("dashboard", operation)
            .to_json(),
    )
}

/// A mounted dashboard
#[wasm_bindgen]
pub struct DashboardHandle {
    app: Option<AppHandle<DashboardRoot>>,
}

#[wasm_bindgen]
impl DashboardHandle {
    /// Remove the dashboard and destroy its chart
    pub fn unmount(&mut self) {
        if let Some(app) = self.app.take() {
            app.destroy();
        }
    }
}

/// Mount the dashboard for `payload_json` into the element with `element_id`
#[wasm_bindgen(js_name = mountDashboard)]
pub fn mount_dashboard(
    element_id: &str,
    ticker: String,
    payload_json: &str,
    config_json: Option<String>,
) -> Result<DashboardHandle, JsValue> {
    init_logging();

    let config = load_config(config_json.as_deref()).map_err(|e| to_js_error(e, "mount"))?;
    let response = StockResponse::from_json(payload_json).map_err(|e| to_js_error(e, "mount"))?;

    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(element_id))
        .ok_or_else(|| {
            to_js_error(
                DashboardError::MountTargetNotFound {
                    id: element_id.to_string(),
                },
                "mount",
            )
        })?;

    let chart = chart_capability(&config);
    log::info!("mounting {ticker} dashboard into #{element_id} ({chart:?})");

    let app = yew::Renderer::<DashboardRoot>::with_root_and_props(
        root,
        DashboardRootProps {
            context: DashboardContext::new(config, chart),
            ticker,
            response,
        },
    )
    .render();
    Ok(DashboardHandle { app: Some(app) })
}

/// Pre-render the dashboard for `payload_json` to an HTML string
#[wasm_bindgen(js_name = renderDashboardHtml)]
pub async fn render_dashboard_html(
    ticker: String,
    payload_json: String,
    config_json: Option<String>,
) -> Result<String, JsValue> {
    init_logging();

    let config = load_config(config_json.as_deref()).map_err(|e| to_js_error(e, "render"))?;
    let response = StockResponse::from_json(&payload_json).map_err(|e| to_js_error(e, "render"))?;
    Ok(render_html(ticker, response, config).await)
}
