//! An in-process key-value store with per-entry expiration
//!
//! This crate provides a `Store` that keeps string-keyed values alongside an
//! absolute expiration time. Expired values read as absent and are reclaimed
//! by an explicit `cleanup` sweep. The whole store can be snapshotted to and
//! restored from a JSON file with `JsonPersister`.
//!
//! ```rust
//! use memkv::Store;
//! use chrono::Duration;
//!
//! let store = Store::new(Duration::minutes(1));
//! store.set("a", "1");
//! store.set_with_expiration("b", "2", Duration::seconds(-1));
//!
//! assert_eq!(store.get("a"), Some("1"));
//! assert_eq!(store.get("b"), None);
//! assert_eq!(store.cleanup(), 1);
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod persist;
pub mod schedule;
pub mod store;

pub use config::StoreConfig;
pub use entry::Entry;
pub use error::PersistError;
pub use persist::JsonPersister;
pub use schedule::{spawn_cleanup, spawn_snapshots};
pub use store::Store;
