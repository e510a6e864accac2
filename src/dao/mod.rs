//! Persistence layer: storage trait, entities, and backends.

/// In-memory storage backend used as a substitute store in tests.
pub mod memory;
/// Shared entity definitions for the four club collections.
pub mod models;
/// MongoDB storage backend.
pub mod mongodb;
/// Storage abstraction layer over database operations.
pub mod storage;
