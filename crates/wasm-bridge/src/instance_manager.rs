//! Registry of drawn chart instances
//! One live chart per mount point; a redraw or unmount destroys the previous one

use js_sys::{Function, Reflect};
use std::cell::RefCell;
use std::collections::HashMap;
use stock_dashboard_shared::{DashboardError, DashboardResult};
use wasm_bindgen::{JsCast, JsValue};

// Thread-local storage for chart instances, keyed by mount element id
thread_local! {
    static CHART_INSTANCES: RefCell<HashMap<String, JsValue>> = RefCell::new(HashMap::new());
}

pub(crate) fn js_error(err: JsValue) -> DashboardError {
    DashboardError::JsInterop {
        message: format!("{err:?}"),
    }
}

pub(crate) fn call_method(target: &JsValue, name: &str) -> DashboardResult<JsValue> {
    let method = Reflect::get(target, &JsValue::from_str(name))
        .map_err(js_error)?
        .dyn_into::<Function>()
        .map_err(|_| DashboardError::JsInterop {
            message: format!("chart instance has no {name}() method"),
        })?;
    method.call0(target).map_err(js_error)
}

pub struct InstanceManager;

impl InstanceManager {
    /// Store `chart` for `mount_id`, returning the instance it replaces
    pub fn replace(mount_id: &str, chart: JsValue) -> Option<JsValue> {
        CHART_INSTANCES.with(|instances| instances.borrow_mut().insert(mount_id.to_string(), chart))
    }

    /// Remove and return the instance drawn into `mount_id`
    pub fn take(mount_id: &str) -> Option<JsValue> {
        CHART_INSTANCES.with(|instances| instances.borrow_mut().remove(mount_id))
    }

    /// Destroy the chart drawn into `mount_id`, if any
    ///
    /// Returns whether an instance was found.
    pub fn destroy(mount_id: &str) -> DashboardResult<bool> {
        match Self::take(mount_id) {
            Some(chart) => {
                call_method(&chart, "destroy")?;
                log::debug!("destroyed chart in #{mount_id}");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn instance_count() -> usize {
        CHART_INSTANCES.with(|instances| instances.borrow().len())
    }
}
