//! SQLite persistence for taskflow.
//!
//! The task store only needs a key-value contract, so the database holds a
//! single `kv` table. Opening a connection lives in [`db`]; the
//! [`Storage`](crate::libs::storage::Storage) implementation lives in
//! [`storage`].
//!
//! ```rust,no_run
//! use taskflow::db::storage::SqliteStorage;
//! use taskflow::libs::store::TaskStore;
//!
//! let store = TaskStore::load(SqliteStorage::new()?);
//! println!("{} tasks", store.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management for the `taskflow.db` file.
pub mod db;

/// Key-value storage backend for tasks and the theme preference.
pub mod storage;
