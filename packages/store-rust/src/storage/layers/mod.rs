//! Feature layers that wrap an inner [`Storage`](super::Storage).
//!
//! Each layer holds exclusive ownership of exactly one inner `Storage`
//! (the engine or another layer), supplied at construction and never
//! swapped afterwards. A layer applies its single concern and delegates
//! to its immediate inner storage; it never reaches through to deeper
//! links, and it never swallows an inner error — error kinds propagate
//! unchanged through any depth of layering.
//!
//! Transform layers are self-consistent across a put/get pair: whatever
//! a layer's `put` encodes, its `get` decodes, so a chain returns the
//! caller's original bytes as long as the same configuration is used
//! for both operations.

pub mod compression;
pub mod metrics;
pub mod obfuscation;

pub use compression::CompressionLayer;
pub use metrics::{MetricsHandle, MetricsLayer, StorageStats};
pub use obfuscation::ObfuscationLayer;
