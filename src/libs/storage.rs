//! Durable key-value storage contract used by the task store.
//!
//! Two logical keys are in use: [`TASKS_KEY`] holds the serialized task
//! collection and [`DARK_MODE_KEY`] holds the theme preference. The default
//! backend is [`crate::db::storage::SqliteStorage`]; [`MemoryStorage`] keeps
//! everything in a map and is what tests and throwaway sessions use.

use super::error::TaskResult;
use std::collections::HashMap;

pub const TASKS_KEY: &str = "tasks";
pub const DARK_MODE_KEY: &str = "darkMode";

pub trait Storage {
    fn get(&self, key: &str) -> TaskResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> TaskResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a key, as if a previous session had written it.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> TaskResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> TaskResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> TaskResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> TaskResult<()> {
        (**self).set(key, value)
    }
}
