//! Factory for assembling fully-wired storage chains.
//!
//! [`build_storage`] is the construction entry point: given a
//! [`StorageConfig`] it stacks the enabled layers around an
//! [`InMemoryStorage`](super::InMemoryStorage) in the fixed supported
//! order and returns the outermost [`Storage`] handle.
//!
//! Layer order (outermost to innermost):
//! 1. `MetricsLayer` -- counts every call entering the chain
//! 2. `CompressionLayer` -- compresses the caller's value first
//! 3. `ObfuscationLayer` -- XOR applies to the compressed bytes
//! 4. `InMemoryStorage` -- terminal engine holding physical bytes
//!
//! The order is significant: on put a value is compressed then
//! obfuscated, and on get the inverse transforms apply in reverse
//! (de-obfuscate, then decompress). This matches the byte layout the
//! pre-refactor per-combination stores produced.

use crate::storage::engine::Storage;
use crate::storage::engines::InMemoryStorage;
use crate::storage::error::StorageError;
use crate::storage::layers::{CompressionLayer, MetricsHandle, MetricsLayer, ObfuscationLayer};

/// Feature selection for a storage chain.
///
/// `cipher_key` is required whenever `encrypt` is enabled; it feeds the
/// [`ObfuscationLayer`]'s repeating-key XOR transform.
#[derive(Debug, Clone, Default)]
pub struct StorageConfig {
    /// Compress values before storing them.
    pub compress: bool,
    /// Obfuscate (XOR-transform) stored bytes.
    pub encrypt: bool,
    /// Count put/get operations.
    pub metrics: bool,
    /// Cipher key for the obfuscation transform.
    pub cipher_key: Option<Vec<u8>>,
}

/// A fully-assembled storage chain.
///
/// `metrics` is populated only when the configuration enabled metrics;
/// it is the side channel for reading counters, since the [`Storage`]
/// contract does not expose statistics.
pub struct BuiltStorage {
    /// The outermost handle of the chain.
    pub storage: Box<dyn Storage>,
    /// Handle onto the chain's metrics counters, if enabled.
    pub metrics: Option<MetricsHandle>,
}

impl std::fmt::Debug for BuiltStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltStorage")
            .field("storage", &"Box<dyn Storage>")
            .field("metrics", &self.metrics)
            .finish()
    }
}

/// Assembles a storage chain from `config`.
///
/// # Errors
///
/// Fails with [`StorageError::Config`] if `encrypt` is enabled without
/// a non-empty `cipher_key`. No storage is constructed on failure.
pub fn build_storage(mut config: StorageConfig) -> Result<BuiltStorage, StorageError> {
    let mut storage: Box<dyn Storage> = Box::new(InMemoryStorage::new());

    if config.encrypt {
        let cipher_key = config
            .cipher_key
            .take()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| StorageError::Config {
                reason: "encryption requested without a cipher key".to_string(),
            })?;
        storage = Box::new(ObfuscationLayer::new(storage, cipher_key)?);
    }

    if config.compress {
        storage = Box::new(CompressionLayer::new(storage));
    }

    let mut metrics = None;
    if config.metrics {
        let layer = MetricsLayer::new(storage);
        metrics = Some(layer.handle());
        storage = Box::new(layer);
    }

    tracing::debug!(
        compress = config.compress,
        encrypt = config.encrypt,
        metrics = config.metrics,
        "assembled storage chain"
    );

    Ok(BuiltStorage { storage, metrics })
}
