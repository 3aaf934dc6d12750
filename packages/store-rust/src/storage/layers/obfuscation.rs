//! Obfuscation layer: reversible repeating-key XOR byte transform.
//!
//! This is obfuscation, not encryption. The transform hides stored
//! bytes from casual inspection but provides no confidentiality against
//! an adversary; do not rely on it as a security mechanism.

use crate::storage::engine::Storage;
use crate::storage::error::StorageError;

/// Layer that XORs every value with a repeating cipher key.
///
/// The transform is its own inverse, so `put` and `get` apply the same
/// operation: `out[i] = in[i] ^ key[i % key.len()]`. Construction fails
/// with [`StorageError::Config`] if the cipher key is empty.
pub struct ObfuscationLayer {
    inner: Box<dyn Storage>,
    cipher_key: Vec<u8>,
}

impl std::fmt::Debug for ObfuscationLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObfuscationLayer")
            .field("inner", &"Box<dyn Storage>")
            .field("cipher_key", &self.cipher_key)
            .finish()
    }
}

impl ObfuscationLayer {
    /// Wraps `inner` with the XOR transform keyed by `cipher_key`.
    ///
    /// # Errors
    ///
    /// Fails with [`StorageError::Config`] if `cipher_key` is empty.
    pub fn new(inner: Box<dyn Storage>, cipher_key: Vec<u8>) -> Result<Self, StorageError> {
        if cipher_key.is_empty() {
            return Err(StorageError::Config {
                reason: "cipher key must not be empty".to_string(),
            });
        }
        Ok(Self { inner, cipher_key })
    }

    /// Applies the self-inverse repeating-key XOR in place.
    fn transform(&self, mut data: Vec<u8>) -> Vec<u8> {
        for (i, byte) in data.iter_mut().enumerate() {
            *byte ^= self.cipher_key[i % self.cipher_key.len()];
        }
        data
    }
}

impl Storage for ObfuscationLayer {
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        self.inner.put(key, self.transform(value))
    }

    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.inner.get(key).map(|stored| self.transform(stored))
    }
}
