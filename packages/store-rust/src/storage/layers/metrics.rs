//! Metrics layer: counts put/get operations without touching the data.
//!
//! Counting policy is attempts, not successes: a counter increments
//! when an operation is invoked, before the inner storage reports its
//! result, so a `get` that fails with `NotFound` still counts.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::storage::engine::Storage;
use crate::storage::error::StorageError;

/// Point-in-time snapshot of a [`MetricsLayer`]'s counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StorageStats {
    /// Number of put attempts made through the layer.
    pub puts: u64,
    /// Number of get attempts made through the layer.
    pub gets: u64,
}

#[derive(Debug, Default)]
struct OperationCounters {
    puts: AtomicU64,
    gets: AtomicU64,
}

/// Read-only handle onto a [`MetricsLayer`]'s counters.
///
/// The `Storage` contract alone does not expose statistics, and boxing
/// a layer into a chain hides its concrete type. Callers keep a handle
/// (cloneable, shares the layer's counters) to read stats after the
/// chain is assembled.
#[derive(Debug, Clone)]
pub struct MetricsHandle {
    counters: Arc<OperationCounters>,
}

impl MetricsHandle {
    /// Returns the current counter values.
    #[must_use]
    pub fn stats(&self) -> StorageStats {
        StorageStats {
            puts: self.counters.puts.load(Ordering::Relaxed),
            gets: self.counters.gets.load(Ordering::Relaxed),
        }
    }
}

/// Layer that counts operation attempts and delegates unchanged.
///
/// Counters are layer-local: stacking two `MetricsLayer` instances
/// produces two independent counters, each counting only the calls that
/// reached that instance. Counters reset only by building a new layer.
///
/// Increments are atomic, so counts stay accurate under concurrent use
/// of one chain.
pub struct MetricsLayer {
    inner: Box<dyn Storage>,
    counters: Arc<OperationCounters>,
}

impl MetricsLayer {
    /// Wraps `inner` with operation counting.
    #[must_use]
    pub fn new(inner: Box<dyn Storage>) -> Self {
        Self {
            inner,
            counters: Arc::new(OperationCounters::default()),
        }
    }

    /// Returns a handle sharing this layer's counters.
    #[must_use]
    pub fn handle(&self) -> MetricsHandle {
        MetricsHandle {
            counters: self.counters.clone(),
        }
    }
}

impl Storage for MetricsLayer {
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        self.counters.puts.fetch_add(1, Ordering::Relaxed);
        self.inner.put(key, value)
    }

    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.counters.gets.fetch_add(1, Ordering::Relaxed);
        self.inner.get(key)
    }
}
