//! The canonical task collection and its synchronization with durable storage.
//!
//! [`TaskStore`] is constructed once per session around an injected
//! [`Storage`] backend. Every mutating call writes the full collection back
//! to storage before returning. A failed write never rolls the mutation
//! back: the in-memory collection stays authoritative for the session, the
//! failure is logged and kept as a pending error that the caller collects
//! with [`TaskStore::take_persist_error`].
//!
//! Storage order is creation order with the newest task first. Sorting for
//! display happens in [`crate::libs::view::project`] and never touches it.
//!
//! New tasks get a `createdAt` strictly after the newest task, even when the
//! clock hasn't moved. Loaded records dated more than a second in the future
//! (clock skew, hand edits) don't count: new tasks are stamped with the
//! current time and sort before them.

use super::error::{TaskError, TaskResult};
use super::id::new_id;
use super::storage::{Storage, DARK_MODE_KEY, TASKS_KEY};
use super::task::{Priority, Task, TaskRecord};
use chrono::{Duration, Utc};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Welcome tasks added by [`TaskStore::seed_samples`], oldest first.
pub const SAMPLE_TASKS: [(&str, &str, Priority); 5] = [
    ("Welcome to TaskFlow! 🎉", "other", Priority::Medium),
    ("Mark a task done to complete it", "work", Priority::High),
    ("Try the filters to organize your tasks", "personal", Priority::Medium),
    ("Edit tasks to fix a typo", "work", Priority::Low),
    ("Your tasks are automatically saved", "personal", Priority::High),
];

/// How far ahead of the clock a stored `createdAt` may be and still push new
/// timestamps forward.
const CLOCK_SKEW_SECS: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Updated,
    Unchanged,
}

/// Result of clearing completed tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cleared {
    Nothing,
    Removed(usize),
}

pub struct TaskStore<S: Storage> {
    storage: S,
    tasks: Vec<Task>,
    dark_mode: bool,
    persist_error: Option<TaskError>,
}

impl<S: Storage> TaskStore<S> {
    /// Reads the persisted state. Missing or unreadable data yields an empty
    /// collection; individual malformed records are skipped.
    pub fn load(storage: S) -> Self {
        let tasks = match storage.get(TASKS_KEY) {
            Ok(Some(raw)) => parse_tasks(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "failed to read tasks, starting empty");
                Vec::new()
            }
        };
        let dark_mode = match storage.get(DARK_MODE_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(e) => {
                warn!(error = %e, "failed to read theme preference");
                false
            }
        };
        debug!(count = tasks.len(), dark_mode, "task store loaded");

        Self {
            storage,
            tasks,
            dark_mode,
            persist_error: None,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn add(&mut self, text: &str, category: Option<&str>, priority: Option<Priority>) -> TaskResult<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::Validation);
        }

        let task = Task::new(new_id(), text, self.next_timestamp(), category, priority);
        debug!(id = %task.id, "task added");
        self.tasks.insert(0, task);
        self.sync();

        Ok(&self.tasks[0])
    }

    /// Flips `completed` and returns the new value.
    pub fn toggle(&mut self, id: &str) -> TaskResult<bool> {
        let task = self.find_mut(id)?;
        task.completed = !task.completed;
        let completed = task.completed;
        debug!(id, completed, "task toggled");
        self.sync();

        Ok(completed)
    }

    pub fn edit(&mut self, id: &str, new_text: &str) -> TaskResult<EditOutcome> {
        let new_text = new_text.trim();
        let task = self.find_mut(id)?;
        if new_text.is_empty() {
            return Err(TaskError::Validation);
        }
        if task.text == new_text {
            return Ok(EditOutcome::Unchanged);
        }

        task.text = new_text.to_string();
        debug!(id, "task edited");
        self.sync();

        Ok(EditOutcome::Updated)
    }

    pub fn remove(&mut self, id: &str) -> TaskResult<Task> {
        let index = self.tasks.iter().position(|t| t.id == id).ok_or_else(|| TaskError::NotFound(id.to_string()))?;
        let task = self.tasks.remove(index);
        debug!(id, "task removed");
        self.sync();

        Ok(task)
    }

    pub fn remove_completed(&mut self) -> Cleared {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed == 0 {
            return Cleared::Nothing;
        }

        debug!(removed, "completed tasks cleared");
        self.sync();
        Cleared::Removed(removed)
    }

    /// Deletes every task. Confirmation is the caller's responsibility.
    pub fn remove_all(&mut self) -> usize {
        let removed = self.tasks.len();
        self.tasks.clear();
        debug!(removed, "all tasks cleared");
        self.sync();

        removed
    }

    /// Flips the theme preference and returns whether dark mode is now on.
    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        let value = if self.dark_mode { "true" } else { "false" };
        if let Err(e) = self.storage.set(DARK_MODE_KEY, value) {
            warn!(error = %e, "failed to persist theme preference");
            self.persist_error = Some(TaskError::Persistence(e.to_string()));
        }

        self.dark_mode
    }

    /// Adds the welcome tasks when the store is empty. Returns how many were added.
    pub fn seed_samples(&mut self) -> usize {
        if !self.is_empty() {
            return 0;
        }

        let mut added = 0;
        for (text, category, priority) in SAMPLE_TASKS {
            if self.add(text, Some(category), Some(priority)).is_ok() {
                added += 1;
            }
        }
        added
    }

    /// Writes the full collection to storage.
    pub fn persist(&mut self) -> TaskResult<()> {
        let json = serde_json::to_string(&self.tasks).map_err(|e| TaskError::Persistence(e.to_string()))?;
        self.storage.set(TASKS_KEY, &json).map_err(|e| TaskError::Persistence(e.to_string()))
    }

    /// Returns the most recent persistence failure, if any, and clears it.
    pub fn take_persist_error(&mut self) -> Option<TaskError> {
        self.persist_error.take()
    }

    fn sync(&mut self) {
        if let Err(e) = self.persist() {
            warn!(error = %e, "tasks kept in memory only");
            self.persist_error = Some(e);
        }
    }

    fn find_mut(&mut self, id: &str) -> TaskResult<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id).ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    // Strictly later than every recent task, so time-based sorting stays total.
    // Records dated beyond the skew window are ignored rather than chased.
    fn next_timestamp(&self) -> chrono::DateTime<Utc> {
        let now = Utc::now();
        let horizon = now + Duration::seconds(CLOCK_SKEW_SECS);
        match self.tasks.iter().map(|t| t.created_at).filter(|t| *t <= horizon).max() {
            Some(latest) if latest >= now => latest + Duration::microseconds(1),
            _ => now,
        }
    }
}

fn parse_tasks(raw: &str) -> Vec<Task> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            warn!(error = %e, "stored tasks are malformed, starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut tasks = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        let task = match serde_json::from_value::<TaskRecord>(value).ok().and_then(TaskRecord::into_task) {
            Some(task) => task,
            None => {
                warn!(index, "skipping malformed task record");
                continue;
            }
        };
        if !seen.insert(task.id.clone()) {
            warn!(index, id = %task.id, "skipping task with duplicate id");
            continue;
        }
        tasks.push(task);
    }
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::storage::MemoryStorage;

    #[test]
    fn parse_skips_malformed_and_duplicate_records() {
        let raw = r#"[
            {"id":"a","text":"First","completed":true,"createdAt":"2025-01-02T10:00:00Z","category":"work","priority":"high"},
            {"id":"b","text":"","createdAt":"2025-01-02T10:00:00Z"},
            {"text":"No id","createdAt":"2025-01-02T10:00:00Z"},
            42,
            {"id":"a","text":"Duplicate","createdAt":"2025-01-03T10:00:00Z"},
            {"id":"c","text":"Bad date","createdAt":"yesterday"},
            {"id":"d","text":"Second","createdAt":"2025-01-01T10:00:00Z"}
        ]"#;

        let tasks = parse_tasks(raw);
        let ids: Vec<&str> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "d"]);
        assert!(tasks[0].completed);
        assert_eq!(tasks[1].priority, Priority::Medium);
    }

    #[test]
    fn created_at_is_strictly_increasing() {
        let mut store = TaskStore::load(MemoryStorage::new());
        for i in 0..50 {
            store.add(&format!("Task {}", i), None, None).unwrap();
        }
        let stamps: Vec<_> = store.tasks().iter().map(|t| t.created_at).collect();
        assert!(stamps.windows(2).all(|w| w[0] > w[1]));
    }
}
