use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use userstat_core::{ResourceKind, TransportError, Upstream, UserId};

/// Instruction for how `fetch` should behave for a given resource kind.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return `body` after `delay`.
    Respond {
        /// Raw payload to return.
        body: Vec<u8>,
        /// Simulated latency before responding.
        delay: Duration,
    },
    /// Fail immediately with the provided error.
    Fail(TransportError),
    /// Hang indefinitely (simulate a stalled upstream).
    Hang,
}

impl MockBehavior {
    /// Respond immediately with `body`.
    pub fn body(body: impl Into<Vec<u8>>) -> Self {
        Self::Respond {
            body: body.into(),
            delay: Duration::ZERO,
        }
    }

    /// Respond with `body` after `delay`.
    pub fn delayed(body: impl Into<Vec<u8>>, delay: Duration) -> Self {
        Self::Respond {
            body: body.into(),
            delay,
        }
    }
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<ResourceKind, MockBehavior>,
    calls: Vec<(ResourceKind, UserId)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
    in_flight: Arc<AtomicUsize>,
}

impl DynamicMockController {
    /// Set the behavior for `fetch` calls of one resource kind.
    pub async fn set_behavior(&self, kind: ResourceKind, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(kind, behavior);
    }

    /// Return a copy of the call log, in arrival order.
    pub async fn calls(&self) -> Vec<(ResourceKind, UserId)> {
        let guard = self.state.lock().await;
        guard.calls.clone()
    }

    /// Number of `fetch` calls received so far.
    pub async fn call_count(&self) -> usize {
        self.state.lock().await.calls.len()
    }

    /// Number of `fetch` futures currently alive (started and not yet
    /// completed or dropped).
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Clear all configured behaviors and the call log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.calls.clear();
    }
}

/// An upstream that defers all behavior to an external controller.
///
/// Kinds without a configured behavior answer with status 404.
pub struct DynamicMockUpstream {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
    in_flight: Arc<AtomicUsize>,
}

impl DynamicMockUpstream {
    /// Create a new dynamic mock upstream and its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<dyn Upstream>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let in_flight = Arc::new(AtomicUsize::new(0));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
            in_flight: Arc::clone(&in_flight),
        };
        let me = Arc::new(Self {
            name,
            state,
            in_flight,
        });
        (me as Arc<dyn Upstream>, controller)
    }
}

struct InFlightGuard(Arc<AtomicUsize>);

impl InFlightGuard {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Upstream for DynamicMockUpstream {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(
        &self,
        kind: ResourceKind,
        user_id: &UserId,
    ) -> Result<Vec<u8>, TransportError> {
        let _guard = InFlightGuard::enter(&self.in_flight);

        // Log the call and snapshot the behavior without holding the lock across awaits
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push((kind, user_id.clone()));
            guard.rules.get(&kind).cloned()
        };

        match behavior {
            Some(MockBehavior::Respond { body, delay }) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(body)
            }
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(TransportError::status(kind, 404)),
        }
    }
}
