//! Key-value persistence for the Archiply storefront.
//!
//! A [`KeyValueStore`] holds raw bytes under string keys and [`Cache`] layers
//! JSON serialization on top of it. Two backends are provided:
//!
//! - [`MemoryStore`]: an in-process map behind a clonable handle, so several
//!   owners can share one slot the way browser tabs share local storage
//! - [`FileStore`]: one file per key inside a directory, surviving restarts
//!
//! # Example
//!
//! ```rust
//! use archiply_cache::{Cache, MemoryStore};
//!
//! let cache = Cache::new(MemoryStore::new());
//! cache.set("archiply_cart", &vec![1, 2, 3]).unwrap();
//!
//! let value: Option<Vec<i32>> = cache.get("archiply_cart").unwrap();
//! assert_eq!(value, Some(vec![1, 2, 3]));
//! ```

mod error;
mod file;
mod kv;
mod memory;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::{Cache, KeyValueStore};
pub use memory::MemoryStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
