//! Helpers for tests that run in a browser

use js_sys::{Promise, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Stand-in for the chart library, importable without a network
pub const FAKE_CHART_MODULE: &str = concat!(
    "data:text/javascript,",
    "export default class FakeChart {",
    " constructor(el, options) {",
    " globalThis.fakeChartsBuilt = (globalThis.fakeChartsBuilt || 0) + 1;",
    " globalThis.fakeChartOptions = options;",
    " this.el = el;",
    " }",
    " render() { this.el.setAttribute('data-chart', 'drawn'); return Promise.resolve(); }",
    " destroy() { globalThis.fakeChartsDestroyed = (globalThis.fakeChartsDestroyed || 0) + 1; }",
    "}",
);

/// Numeric global set by the fake chart, zero when unset
pub fn counter(name: &str) -> f64 {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

pub fn mount_div(id: &str) -> web_sys::Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("div").unwrap();
    element.set_id(id);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

pub async fn sleep(ms: i32) {
    let promise = Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

/// Poll `condition` for up to two seconds
pub async fn wait_until(condition: impl Fn() -> bool) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        sleep(10).await;
    }
    condition()
}
