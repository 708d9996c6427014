//! Mini LRU - A fixed-capacity in-memory key/value cache
//!
//! Provides O(1) `get`/`put` with least-recently-used eviction.
//!
//! ```
//! use mini_lru::LruCache;
//!
//! let mut cache = LruCache::new(2).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get("a");
//! cache.put("c", 3);
//!
//! assert_eq!(cache.get("b"), None);
//! assert_eq!(cache.get("a"), Some(&1));
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod replay;

pub use cache::{CacheStats, LruCache};
pub use config::Config;
pub use error::{CacheError, Result};
