//! ApexCharts binding
//!
//! The library is pulled in with a dynamic `import()` the first time a chart
//! is drawn, never at module load.

use crate::instance_manager::{call_method, js_error, InstanceManager};
use futures::future::{FutureExt, LocalBoxFuture};
use js_sys::{Array, Function, Promise, Reflect};
use serde::Serialize;
use std::rc::Rc;
use stock_dashboard_renderer::{ChartBackend, ChartModuleLoader, ChartSpec};
use stock_dashboard_shared::{ChartOptions, DashboardError, DashboardResult};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(inline_js = "export function import_module(specifier) { return import(specifier); }")]
extern "C" {
    fn import_module(specifier: &str) -> Promise;
}

/// Loads the ApexCharts ES module
pub struct ApexChartsLoader {
    specifier: String,
}

impl ApexChartsLoader {
    pub fn new(specifier: impl Into<String>) -> Self {
        Self {
            specifier: specifier.into(),
        }
    }
}

impl ChartModuleLoader for ApexChartsLoader {
    fn load(&self) -> LocalBoxFuture<'static, DashboardResult<Rc<dyn ChartBackend>>> {
        let specifier = self.specifier.clone();

        async move {
            let module = JsFuture::from(import_module(&specifier))
                .await
                .map_err(|err| DashboardError::ChartLoad {
                    message: format!("import({specifier:?}) rejected: {err:?}"),
                })?;

            let constructor = Reflect::get(&module, &JsValue::from_str("default"))
                .map_err(js_error)?
                .dyn_into::<Function>()
                .map_err(|_| DashboardError::ChartLoad {
                    message: format!("{specifier} has no default export constructor"),
                })?;

            log::info!("chart module {specifier} loaded");
            Ok(Rc::new(ApexChartsBackend { constructor }) as Rc<dyn ChartBackend>)
        }
        .boxed_local()
    }
}

pub struct ApexChartsBackend {
    constructor: Function,
}

impl ApexChartsBackend {
    /// Plain JS options object with the y-axis formatter attached
    fn options_to_js(options: &ChartOptions) -> DashboardResult<JsValue> {
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let value = options
            .serialize(&serializer)
            .map_err(|err| DashboardError::JsInterop {
                message: err.to_string(),
            })?;

        let format = options.y_label_format.clone();
        let formatter = Closure::wrap(
            Box::new(move |value: f64| format.format(value)) as Box<dyn Fn(f64) -> String>
        )
        .into_js_value();

        let yaxis = Reflect::get(&value, &JsValue::from_str("yaxis")).map_err(js_error)?;
        let labels = Reflect::get(&yaxis, &JsValue::from_str("labels")).map_err(js_error)?;
        Reflect::set(&labels, &JsValue::from_str("formatter"), &formatter).map_err(js_error)?;

        Ok(value)
    }
}

impl ChartBackend for ApexChartsBackend {
    fn draw(&self, mount_id: &str, spec: &ChartSpec) -> DashboardResult<()> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| DashboardError::JsInterop {
                message: "no document available".to_string(),
            })?;
        let element = document
            .get_element_by_id(mount_id)
            .ok_or_else(|| DashboardError::MountTargetNotFound {
                id: mount_id.to_string(),
            })?;

        let options = Self::options_to_js(&spec.options)?;

        InstanceManager::destroy(mount_id)?;

        let chart = Reflect::construct(&self.constructor, &Array::of2(&element, &options))
            .map_err(|err| DashboardError::ChartDraw {
                message: format!("{err:?}"),
            })?;
        // render() resolves once the SVG is in the DOM; nothing waits on it
        call_method(&chart, "render")?;

        InstanceManager::replace(mount_id, chart);
        log::debug!(
            "drew chart into #{mount_id} ({} live)",
            InstanceManager::instance_count()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser_test_support::*;
    use stock_dashboard_config::DashboardConfig;
    use stock_dashboard_renderer::{build_chart_options, ChartCapability};
    use stock_dashboard_shared::CandlePoint;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn spec() -> ChartSpec {
        let points = [CandlePoint::new("2024-03-01", 180.0, 183.0, 179.5, 182.5)];
        ChartSpec {
            options: build_chart_options(&points, "aapl", &DashboardConfig::default()),
        }
    }

    fn get(target: &JsValue, path: &[&str]) -> JsValue {
        path.iter().fold(target.clone(), |value, key| {
            Reflect::get(&value, &JsValue::from_str(key)).unwrap()
        })
    }

    #[wasm_bindgen_test]
    fn test_options_carry_label_formatter() {
        let options = ApexChartsBackend::options_to_js(&spec().options).unwrap();

        assert_eq!(get(&options, &["chart", "type"]).as_string().as_deref(), Some("candlestick"));
        assert_eq!(get(&options, &["title", "text"]).as_string().as_deref(), Some("AAPL Stock Price"));

        let formatter: Function = get(&options, &["yaxis", "labels", "formatter"]).dyn_into().unwrap();
        let label = formatter
            .call1(&JsValue::NULL, &JsValue::from_f64(182.345))
            .unwrap();
        assert_eq!(label.as_string().as_deref(), Some("$182.34"));
    }

    #[wasm_bindgen_test]
    async fn test_second_draw_reuses_module() {
        mount_div("apex-redraw");
        let built = counter("fakeChartsBuilt");
        let destroyed = counter("fakeChartsDestroyed");

        let capability = ChartCapability::available(ApexChartsLoader::new(FAKE_CHART_MODULE));
        let module = capability.module().unwrap();

        module.draw("apex-redraw", &spec()).await.unwrap();
        module.draw("apex-redraw", &spec()).await.unwrap();

        assert_eq!(module.load_count(), 1);
        assert_eq!(counter("fakeChartsBuilt"), built + 2.0);
        // The redraw replaced the first instance
        assert_eq!(counter("fakeChartsDestroyed"), destroyed + 1.0);

        let drawn = get(&js_sys::global(), &["fakeChartOptions", "series"]);
        assert_eq!(js_sys::Array::from(&drawn).length(), 1);

        assert_eq!(InstanceManager::destroy("apex-redraw"), Ok(true));
    }

    #[wasm_bindgen_test]
    async fn test_module_without_default_export() {
        let capability = ChartCapability::available(ApexChartsLoader::new(
            "data:text/javascript,export const version = 1;",
        ));
        let module = capability.module().unwrap();

        let err = module.draw("apex-missing", &spec()).await.unwrap_err();
        assert!(matches!(err, DashboardError::ChartLoad { .. }));
    }

    #[wasm_bindgen_test]
    async fn test_missing_mount_point() {
        let capability = ChartCapability::available(ApexChartsLoader::new(FAKE_CHART_MODULE));
        let module = capability.module().unwrap();

        let err = module.draw("apex-nowhere", &spec()).await.unwrap_err();
        assert_eq!(
            err,
            DashboardError::MountTargetNotFound {
                id: "apex-nowhere".to_string()
            }
        );
    }
}
