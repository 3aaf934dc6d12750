//! Error types for storage operations.

/// Errors returned by [`Storage`](super::Storage) operations and chain
/// construction.
///
/// Layers propagate inner errors unchanged in kind; a `NotFound` from
/// the terminal engine surfaces as `NotFound` regardless of how many
/// layers sit above it.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// `get` on a key that was never written to this chain.
    #[error("key not found: {key}")]
    NotFound { key: String },

    /// A transform layer received bytes it cannot reverse, typically
    /// because the chain configuration changed between write and read.
    #[error("stored bytes could not be decoded")]
    Decode {
        #[source]
        source: std::io::Error,
    },

    /// Chain misconfiguration detected at construction time.
    #[error("invalid storage configuration: {reason}")]
    Config { reason: String },
}
