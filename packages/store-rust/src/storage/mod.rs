//! Layered storage system for the Strata store.
//!
//! Provides the shared [`Storage`] contract and the pieces that compose
//! into a storage chain:
//!
//! - **Terminal engine** ([`InMemoryStorage`]): the innermost key-value
//!   store holding physical bytes
//! - **Feature layers** ([`CompressionLayer`], [`ObfuscationLayer`],
//!   [`MetricsLayer`]): decorators that each wrap one inner [`Storage`]
//!   and add a single concern
//! - **Factory** ([`build_storage`]): assembles a chain from a
//!   [`StorageConfig`] in the fixed supported order
//!
//! A chain is built once, is immutable afterwards, and forms a simple
//! path: every layer owns exactly one inner [`Storage`], terminating in
//! the engine. Callers interact only with the outermost handle.

pub mod engine;
pub mod engines;
pub mod error;
pub mod factory;
pub mod layers;

pub use engine::*;
pub use engines::*;
pub use error::*;
pub use factory::*;
pub use layers::*;
