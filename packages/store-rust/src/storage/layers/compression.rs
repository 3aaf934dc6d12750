//! Compression layer: zlib-compresses values on the way in, inflates
//! them on the way out.

use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use crate::storage::engine::Storage;
use crate::storage::error::StorageError;

/// Compression level applied to every value; not configurable per call.
const ZLIB_LEVEL: u32 = 6;

/// Layer that stores values zlib-compressed.
///
/// `put` compresses the value and forwards the compressed bytes to the
/// inner storage; `get` reads the inner bytes and inflates them back to
/// the original value. Reading bytes that are not valid zlib output for
/// this layer (e.g. the chain configuration changed between write and
/// read) fails with [`StorageError::Decode`].
pub struct CompressionLayer {
    inner: Box<dyn Storage>,
}

impl CompressionLayer {
    /// Wraps `inner` with compression.
    #[must_use]
    pub fn new(inner: Box<dyn Storage>) -> Self {
        Self { inner }
    }
}

impl Storage for CompressionLayer {
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        let mut encoder = ZlibEncoder::new(
            Vec::with_capacity(value.len() / 2),
            Compression::new(ZLIB_LEVEL),
        );
        encoder
            .write_all(&value)
            .and_then(|()| encoder.finish())
            .map_err(|source| StorageError::Decode { source })
            .and_then(|compressed| self.inner.put(key, compressed))
    }

    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let stored = self.inner.get(key)?;

        let mut decoder = ZlibDecoder::new(stored.as_slice());
        let mut value = Vec::new();
        decoder.read_to_end(&mut value).map_err(|source| {
            tracing::warn!(key = %key, "stored bytes are not valid zlib data");
            StorageError::Decode { source }
        })?;

        Ok(value)
    }
}
