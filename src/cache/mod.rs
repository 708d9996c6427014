//! Cache Module
//!
//! Provides a fixed-capacity in-memory cache with LRU eviction.

mod lru;
mod stats;
mod store;


// Re-export public types
pub use lru::Iter;
pub use stats::CacheStats;
pub use store::LruCache;
