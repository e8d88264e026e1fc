//! ResourceLoader — one generic fetch lifecycle, instantiated per resource.
//!
//! Profile, job list, and job detail all run the same four-state machine:
//! Idle → Loading → {Succeeded, Failed}, with retry re-entering Loading.
//! Failures never propagate to the caller; they land in the status so the
//! view layer always has exactly one branch to render.
//!
//! Successive `load` calls are not serialized or deduplicated, but each one
//! takes a sequence number and a completion that is no longer the newest is
//! discarded. The loader's terminal state therefore always reflects the most
//! recently issued request, even when responses arrive out of order.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::errors::FetchError;

/// The I/O behind a loader. Production impls wrap `JobBoardClient`; tests
/// inject fakes with scripted or gated outcomes.
#[async_trait]
pub trait ResourceFetcher: Send + Sync + 'static {
    type Request: Clone + Send + Sync + 'static;
    type Output: Send + Sync + 'static;

    async fn fetch(&self, request: &Self::Request) -> Result<Self::Output, FetchError>;
}

/// Per-resource fetch state. `Succeeded` and `Failed` carry what they
/// resolved to; the payload is shared via `Arc` so status snapshots are cheap.
#[derive(Debug)]
pub enum FetchStatus<T> {
    Idle,
    Loading,
    Succeeded(Arc<T>),
    Failed(Arc<FetchError>),
}

impl<T> Clone for FetchStatus<T> {
    fn clone(&self) -> Self {
        match self {
            FetchStatus::Idle => FetchStatus::Idle,
            FetchStatus::Loading => FetchStatus::Loading,
            FetchStatus::Succeeded(payload) => FetchStatus::Succeeded(payload.clone()),
            FetchStatus::Failed(err) => FetchStatus::Failed(err.clone()),
        }
    }
}

impl<T> FetchStatus<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchStatus::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, FetchStatus::Succeeded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchStatus::Failed(_))
    }
}

struct LoaderState<F: ResourceFetcher> {
    status: FetchStatus<F::Output>,
    /// Last successfully decoded payload. A later failure leaves this in
    /// place so the view can keep showing stale-but-valid data.
    payload: Option<Arc<F::Output>>,
    last_request: Option<F::Request>,
    /// Sequence number of the newest `load` issued.
    issued: u64,
}

/// Drives the fetch lifecycle for one resource type.
///
/// Cheap to clone; clones share the same state and fetcher.
pub struct ResourceLoader<F: ResourceFetcher> {
    fetcher: Arc<F>,
    inner: Arc<Mutex<LoaderState<F>>>,
}

impl<F: ResourceFetcher> Clone for ResourceLoader<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: self.fetcher.clone(),
            inner: self.inner.clone(),
        }
    }
}

impl<F: ResourceFetcher> ResourceLoader<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self {
            fetcher,
            inner: Arc::new(Mutex::new(LoaderState {
                status: FetchStatus::Idle,
                payload: None,
                last_request: None,
                issued: 0,
            })),
        }
    }

    /// Issues the fetch and resolves it into the status machine. Never
    /// returns an error: failure is represented as `FetchStatus::Failed`.
    pub async fn load(&self, request: F::Request) {
        let seq = {
            let mut state = self.inner.lock().unwrap();
            state.issued += 1;
            state.status = FetchStatus::Loading;
            state.last_request = Some(request.clone());
            state.issued
        };

        let result = self.fetcher.fetch(&request).await;

        let mut state = self.inner.lock().unwrap();
        if seq != state.issued {
            warn!(seq, newest = state.issued, "discarding stale fetch completion");
            return;
        }

        match result {
            Ok(payload) => {
                let payload = Arc::new(payload);
                state.payload = Some(payload.clone());
                state.status = FetchStatus::Succeeded(payload);
                debug!(seq, "fetch succeeded");
            }
            Err(err) => {
                warn!(seq, error = %err, "fetch failed");
                state.status = FetchStatus::Failed(Arc::new(err));
            }
        }
    }

    /// Replays the last `load` request. No-op before the first load.
    pub async fn retry(&self) {
        let request = self.inner.lock().unwrap().last_request.clone();
        if let Some(request) = request {
            self.load(request).await;
        }
    }

    pub fn status(&self) -> FetchStatus<F::Output> {
        self.inner.lock().unwrap().status.clone()
    }

    /// Last successfully decoded payload, surviving later failures.
    pub fn payload(&self) -> Option<Arc<F::Output>> {
        self.inner.lock().unwrap().payload.clone()
    }
}
