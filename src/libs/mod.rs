//! Core library modules for the taskflow application.
//!
//! ## Features
//!
//! - **Task Model**: tasks, priorities, filters and sort orders
//! - **Task Store**: the canonical collection and its persistence
//! - **View Projection**: filter → search → sort, plus terminal tables
//! - **Intent Dispatch**: validation, edit state machine and notifications
//! - **Infrastructure**: configuration, data paths, messaging
//!
//! ## Usage
//!
//! ```rust
//! use taskflow::libs::dispatcher::{Dispatcher, Intent};
//! use taskflow::libs::storage::MemoryStorage;
//! use taskflow::libs::store::TaskStore;
//!
//! let mut app = Dispatcher::new(TaskStore::load(MemoryStorage::new()));
//! app.dispatch(Intent::Add { text: "Buy milk".into(), category: None, priority: None });
//! assert_eq!(app.render().stats.total, 1);
//! ```

pub mod config;
pub mod data_storage;
pub mod dispatcher;
pub mod error;
pub mod id;
pub mod messages;
pub mod stats;
pub mod storage;
pub mod store;
pub mod task;
pub mod view;
