//! Shared test support: the pre-refactor per-combination stores.
//!
//! These are the legacy inheritance-style stores the layered design
//! replaced: one concrete type per feature combination, transforms
//! inlined. They are kept only as the regression oracle for behavioral
//! equivalence tests, which is why they live under `tests/` and not in
//! the library.

#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{Read, Write};
use std::sync::Arc;

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use parking_lot::Mutex;

use strata_store::{InMemoryStorage, Storage, StorageError};

/// Same fixed level the layered `CompressionLayer` uses.
const ZLIB_LEVEL: u32 = 6;

/// Repeating-key XOR, shared by the obfuscating legacy stores.
pub fn xor_crypt(data: &[u8], key: &[u8]) -> Vec<u8> {
    data.iter()
        .enumerate()
        .map(|(i, byte)| byte ^ key[i % key.len()])
        .collect()
}

fn zlib_compress(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(ZLIB_LEVEL));
    encoder.write_all(data).expect("write to Vec");
    encoder.finish().expect("finish zlib stream")
}

fn zlib_decompress(data: &[u8]) -> Result<Vec<u8>, StorageError> {
    let mut decoder = ZlibDecoder::new(data);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|source| StorageError::Decode { source })?;
    Ok(out)
}

fn not_found(key: &str) -> StorageError {
    StorageError::NotFound {
        key: key.to_string(),
    }
}

/// Legacy plain store: a mutex-guarded map, no transforms.
#[derive(Default)]
pub struct LegacyInMemoryStore {
    db: Mutex<HashMap<String, Vec<u8>>>,
}

impl LegacyInMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Physical bytes held under `key`, for encoding comparisons.
    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.db.lock().get(key).cloned()
    }
}

impl Storage for LegacyInMemoryStore {
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        self.db.lock().insert(key.to_string(), value);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.db.lock().get(key).cloned().ok_or_else(|| not_found(key))
    }
}

/// Legacy store with compression baked in.
#[derive(Default)]
pub struct LegacyCompressedStore {
    db: Mutex<HashMap<String, Vec<u8>>>,
}

impl LegacyCompressedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.db.lock().get(key).cloned()
    }
}

impl Storage for LegacyCompressedStore {
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        self.db.lock().insert(key.to_string(), zlib_compress(&value));
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let stored = self.db.lock().get(key).cloned().ok_or_else(|| not_found(key))?;
        zlib_decompress(&stored)
    }
}

/// Legacy store with the XOR transform baked in.
pub struct LegacyObfuscatedStore {
    db: Mutex<HashMap<String, Vec<u8>>>,
    cipher_key: Vec<u8>,
}

impl LegacyObfuscatedStore {
    pub fn new(cipher_key: Vec<u8>) -> Self {
        Self {
            db: Mutex::new(HashMap::new()),
            cipher_key,
        }
    }

    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.db.lock().get(key).cloned()
    }
}

impl Storage for LegacyObfuscatedStore {
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        let encoded = xor_crypt(&value, &self.cipher_key);
        self.db.lock().insert(key.to_string(), encoded);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let stored = self.db.lock().get(key).cloned().ok_or_else(|| not_found(key))?;
        Ok(xor_crypt(&stored, &self.cipher_key))
    }
}

/// The combination type that motivated the refactor: compression and
/// obfuscation both baked into one store. Put compresses, then XORs.
pub struct LegacyObfuscatedCompressedStore {
    db: Mutex<HashMap<String, Vec<u8>>>,
    cipher_key: Vec<u8>,
}

impl LegacyObfuscatedCompressedStore {
    pub fn new(cipher_key: Vec<u8>) -> Self {
        Self {
            db: Mutex::new(HashMap::new()),
            cipher_key,
        }
    }

    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.db.lock().get(key).cloned()
    }
}

impl Storage for LegacyObfuscatedCompressedStore {
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        let encoded = xor_crypt(&zlib_compress(&value), &self.cipher_key);
        self.db.lock().insert(key.to_string(), encoded);
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let stored = self.db.lock().get(key).cloned().ok_or_else(|| not_found(key))?;
        let compressed = xor_crypt(&stored, &self.cipher_key);
        zlib_decompress(&compressed)
    }
}

/// Legacy factory: one branch per supported combination.
pub fn build_legacy_storage(
    compress: bool,
    encrypt: bool,
    cipher_key: Option<&[u8]>,
) -> Result<Box<dyn Storage>, StorageError> {
    let require_key = || -> Result<Vec<u8>, StorageError> {
        cipher_key
            .filter(|key| !key.is_empty())
            .map(<[u8]>::to_vec)
            .ok_or_else(|| StorageError::Config {
                reason: "encryption requested without a cipher key".to_string(),
            })
    };

    match (compress, encrypt) {
        (true, true) => Ok(Box::new(LegacyObfuscatedCompressedStore::new(require_key()?))),
        (true, false) => Ok(Box::new(LegacyCompressedStore::new())),
        (false, true) => Ok(Box::new(LegacyObfuscatedStore::new(require_key()?))),
        (false, false) => Ok(Box::new(LegacyInMemoryStore::new())),
    }
}

/// Delegating wrapper that shares the terminal engine, so tests can
/// read the physical bytes a layered chain stored.
pub struct SharedEngine(pub Arc<InMemoryStorage>);

impl Storage for SharedEngine {
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
        self.0.put(key, value)
    }

    fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.0.get(key)
    }
}
