//! # Taskflow
//!
//! A command-line task list manager: create, edit, complete, filter, search,
//! sort and delete short text tasks, persisted locally.
//!
//! ## Features
//!
//! - **Task Store**: newest-first collection synced to SQLite after every change
//! - **View Projection**: status filter, case-insensitive search, three sort orders
//! - **Statistics**: total, active and completed counts
//! - **Interactive Shell**: a session keeping view and edit state between commands
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskflow::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
