//! Strata store — composable layered key-value storage.
//!
//! A terminal in-memory store wrapped by optional feature layers
//! (compression, obfuscation, metrics) that stack in any subset at
//! construction time instead of requiring one concrete type per
//! feature combination.

pub mod storage;

pub use storage::{
    build_storage, BuiltStorage, CompressionLayer, InMemoryStorage, MetricsHandle, MetricsLayer,
    ObfuscationLayer, Storage, StorageConfig, StorageError, StorageStats,
};
