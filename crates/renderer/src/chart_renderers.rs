//! Chart rendering capability
//!
//! The charting library is only usable where an interactive surface exists.
//! The caller decides that once and hands the result down as a
//! [`ChartCapability`]. When available, the library itself is loaded lazily
//! through a [`ChartModuleLoader`] on first draw and memoized afterwards.

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use stock_dashboard_shared::DashboardResult;

mod candlestick_chart;

pub use candlestick_chart::{build_chart_options, render_chart, ChartSpec, ChartView};

/// A loaded charting library that can draw into a mount point
pub trait ChartBackend {
    /// Draw (or redraw) the chart into the element with id `mount_id`
    fn draw(&self, mount_id: &str, spec: &ChartSpec) -> DashboardResult<()>;
}

/// Fetches the charting library
pub trait ChartModuleLoader {
    fn load(&self) -> LocalBoxFuture<'static, DashboardResult<Rc<dyn ChartBackend>>>;
}

type PendingModule = Shared<LocalBoxFuture<'static, DashboardResult<Rc<dyn ChartBackend>>>>;

/// Charting library loaded on first use
///
/// Concurrent callers share one in-flight load. A failed load is forgotten so
/// the next draw retries.
pub struct LazyChartModule {
    loader: Box<dyn ChartModuleLoader>,
    pending: RefCell<Option<PendingModule>>,
    load_count: Cell<u32>,
}

impl LazyChartModule {
    pub fn new(loader: impl ChartModuleLoader + 'static) -> Self {
        Self {
            loader: Box::new(loader),
            pending: RefCell::new(None),
            load_count: Cell::new(0),
        }
    }

    /// Number of times the loader has been invoked
    pub fn load_count(&self) -> u32 {
        self.load_count.get()
    }

    pub async fn backend(&self) -> DashboardResult<Rc<dyn ChartBackend>> {
        let pending = self
            .pending
            .borrow_mut()
            .get_or_insert_with(|| {
                self.load_count.set(self.load_count.get() + 1);
                log::info!("loading chart module");
                self.loader.load().shared()
            })
            .clone();

        let result = pending.clone().await;
        if let Err(err) = &result {
            log::warn!("chart module failed to load: {err}");
            // A retry started by another caller may already occupy the slot
            let mut slot = self.pending.borrow_mut();
            if slot.as_ref().is_some_and(|current| current.ptr_eq(&pending)) {
                slot.take();
            }
        }
        result
    }

    pub async fn draw(&self, mount_id: &str, spec: &ChartSpec) -> DashboardResult<()> {
        let backend = self.backend().await?;
        backend.draw(mount_id, spec).map_err(|err| {
            log::warn!("chart draw into #{mount_id} failed: {err}");
            err
        })
    }
}

/// Whether charts can be drawn in the current environment
#[derive(Clone, Default)]
pub enum ChartCapability {
    Available(Rc<LazyChartModule>),
    /// Non-interactive context (pre-render, no window): placeholder only
    #[default]
    Unavailable,
}

impl ChartCapability {
    pub fn available(loader: impl ChartModuleLoader + 'static) -> Self {
        ChartCapability::Available(Rc::new(LazyChartModule::new(loader)))
    }

    pub fn is_available(&self) -> bool {
        matches!(self, ChartCapability::Available(_))
    }

    pub fn module(&self) -> Option<&Rc<LazyChartModule>> {
        match self {
            ChartCapability::Available(module) => Some(module),
            ChartCapability::Unavailable => None,
        }
    }
}

impl PartialEq for ChartCapability {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ChartCapability::Available(a), ChartCapability::Available(b)) => Rc::ptr_eq(a, b),
            (ChartCapability::Unavailable, ChartCapability::Unavailable) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for ChartCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartCapability::Available(module) => f
                .debug_struct("Available")
                .field("load_count", &module.load_count())
                .finish(),
            ChartCapability::Unavailable => f.write_str("Unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::task::noop_waker;
    use std::collections::VecDeque;
    use std::future::Future;
    use std::task::{Context, Poll};
    use stock_dashboard_shared::DashboardError;

    struct RecordingBackend {
        draws: RefCell<Vec<String>>,
    }

    impl ChartBackend for RecordingBackend {
        fn draw(&self, mount_id: &str, _spec: &ChartSpec) -> DashboardResult<()> {
            self.draws.borrow_mut().push(mount_id.to_string());
            Ok(())
        }
    }

    struct FakeLoader {
        backend: Rc<RecordingBackend>,
        fail_first: Cell<bool>,
    }

    impl ChartModuleLoader for FakeLoader {
        fn load(&self) -> LocalBoxFuture<'static, DashboardResult<Rc<dyn ChartBackend>>> {
            let result: DashboardResult<Rc<dyn ChartBackend>> = if self.fail_first.replace(false) {
                Err(DashboardError::ChartLoad {
                    message: "network down".to_string(),
                })
            } else {
                Ok(self.backend.clone())
            };
            futures::future::ready(result).boxed_local()
        }
    }

    fn fake(fail_first: bool) -> (Rc<RecordingBackend>, LazyChartModule) {
        let backend = Rc::new(RecordingBackend {
            draws: RefCell::new(Vec::new()),
        });
        let module = LazyChartModule::new(FakeLoader {
            backend: backend.clone(),
            fail_first: Cell::new(fail_first),
        });
        (backend, module)
    }

    fn spec() -> ChartSpec {
        let config = stock_dashboard_config::DashboardConfig::default();
        ChartSpec {
            options: build_chart_options(&[], "aapl", &config),
        }
    }

    #[test]
    fn test_module_not_loaded_until_first_draw() {
        let (_, module) = fake(false);
        assert_eq!(module.load_count(), 0);
    }

    #[test]
    fn test_module_loaded_once() {
        let (backend, module) = fake(false);

        block_on(module.draw("chart-a", &spec())).unwrap();
        block_on(module.draw("chart-b", &spec())).unwrap();

        assert_eq!(module.load_count(), 1);
        assert_eq!(*backend.draws.borrow(), ["chart-a", "chart-b"]);
    }

    #[test]
    fn test_failed_load_is_retried() {
        let (backend, module) = fake(true);

        let err = block_on(module.draw("chart", &spec())).unwrap_err();
        assert!(matches!(err, DashboardError::ChartLoad { .. }));
        assert!(backend.draws.borrow().is_empty());

        block_on(module.draw("chart", &spec())).unwrap();
        assert_eq!(module.load_count(), 2);
        assert_eq!(backend.draws.borrow().len(), 1);
    }

    /// Loader whose loads complete only when the test resolves them
    struct GatedLoader {
        gates: RefCell<VecDeque<oneshot::Receiver<DashboardResult<Rc<dyn ChartBackend>>>>>,
    }

    impl ChartModuleLoader for GatedLoader {
        fn load(&self) -> LocalBoxFuture<'static, DashboardResult<Rc<dyn ChartBackend>>> {
            let gate = self.gates.borrow_mut().pop_front();
            async move {
                match gate {
                    Some(gate) => gate.await.unwrap_or_else(|_| {
                        Err(DashboardError::ChartLoad {
                            message: "gate dropped".to_string(),
                        })
                    }),
                    None => Err(DashboardError::ChartLoad {
                        message: "no more loads".to_string(),
                    }),
                }
            }
            .boxed_local()
        }
    }

    #[test]
    fn test_late_failure_keeps_newer_load() {
        let (first_tx, first_rx) = oneshot::channel();
        let (_second_tx, second_rx) = oneshot::channel();
        let module = LazyChartModule::new(GatedLoader {
            gates: RefCell::new(VecDeque::from([first_rx, second_rx])),
        });

        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);

        let mut early = Box::pin(module.backend());
        let mut late = Box::pin(module.backend());
        assert!(early.as_mut().poll(&mut cx).is_pending());
        assert!(late.as_mut().poll(&mut cx).is_pending());
        assert_eq!(module.load_count(), 1);

        let failure: DashboardResult<Rc<dyn ChartBackend>> = Err(DashboardError::ChartLoad {
            message: "network down".to_string(),
        });
        assert!(first_tx.send(failure).is_ok());
        assert!(matches!(early.as_mut().poll(&mut cx), Poll::Ready(Err(_))));

        // A retry begins before the second waiter observes the failure
        let mut retry = Box::pin(module.backend());
        assert!(retry.as_mut().poll(&mut cx).is_pending());
        assert_eq!(module.load_count(), 2);

        assert!(matches!(late.as_mut().poll(&mut cx), Poll::Ready(Err(_))));

        let mut follower = Box::pin(module.backend());
        assert!(follower.as_mut().poll(&mut cx).is_pending());
        assert_eq!(module.load_count(), 2);
    }

    #[test]
    fn test_capability_equality() {
        let (_, module) = fake(false);
        let module = Rc::new(module);
        let a = ChartCapability::Available(module.clone());
        let b = ChartCapability::Available(module);

        assert_eq!(a, b);
        assert_ne!(a, ChartCapability::Unavailable);
        assert_eq!(ChartCapability::default(), ChartCapability::Unavailable);
    }
}
