//! Record store: owns one view's collection and its load lifecycle.
//!
//! Loads are asynchronous (the mock providers simulate network latency) and
//! guarded by an epoch counter: every `load()` supersedes whatever was in
//! flight, and `cancel()` makes sure a pending load can never write back
//! into a store the view has already torn down.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, info};

use kisanmitra_core::Result;

/// Trait for data feeds - makes testing easier and keeps things flexible
///
/// Every mock feed (prices, markets, schemes, ...) implements this.
/// Swapping a mock for a live API later means swapping the provider.
#[async_trait]
pub trait DataProvider<R>: Send + Sync {
    async fn fetch(&self) -> Result<Vec<R>>;
}

/// Where a store is in its load lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed,
}

struct StoreInner<R> {
    state: LoadState,
    records: Vec<R>,
    error: Option<String>,
    epoch: u64,
}

/// Holds the authoritative collection for a view
pub struct RecordStore<R> {
    provider: Arc<dyn DataProvider<R>>,
    inner: Mutex<StoreInner<R>>,
}

impl<R: Clone> RecordStore<R> {
    pub fn new(provider: Arc<dyn DataProvider<R>>) -> Self {
        Self {
            provider,
            inner: Mutex::new(StoreInner {
                state: LoadState::Idle,
                records: Vec::new(),
                error: None,
                epoch: 0,
            }),
        }
    }

    pub fn state(&self) -> LoadState {
        self.inner.lock().state
    }

    pub fn is_loading(&self) -> bool {
        self.state() == LoadState::Loading
    }

    /// Snapshot of the loaded collection (empty until a load completes)
    pub fn records(&self) -> Vec<R> {
        self.inner.lock().records.clone()
    }

    /// Provider failure message, if the last load failed
    pub fn error(&self) -> Option<String> {
        self.inner.lock().error.clone()
    }

    /// Fetch from the provider and populate the store.
    ///
    /// If another `load()` or `cancel()` happens while the fetch is in
    /// flight, this completion is stale and is discarded without touching
    /// the store.
    pub async fn load(&self) -> Result<()> {
        let epoch = {
            let mut inner = self.inner.lock();
            inner.epoch += 1;
            inner.state = LoadState::Loading;
            inner.error = None;
            inner.epoch
        };

        let fetched = self.provider.fetch().await;

        let mut inner = self.inner.lock();
        if inner.epoch != epoch {
            debug!(
                stale = epoch,
                current = inner.epoch,
                "discarding superseded load result"
            );
            return Ok(());
        }

        match fetched {
            Ok(records) => {
                info!(count = records.len(), "store populated");
                inner.records = records;
                inner.state = LoadState::Loaded;
                Ok(())
            }
            Err(e) => {
                inner.state = LoadState::Failed;
                inner.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Abandon any in-flight load. The store keeps whatever it last held.
    pub fn cancel(&self) {
        let mut inner = self.inner.lock();
        inner.epoch += 1;
        if inner.state == LoadState::Loading {
            inner.state = LoadState::Idle;
        }
    }
}
