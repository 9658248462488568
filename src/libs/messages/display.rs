//! Human-readable text for every [`Message`].
//!
//! All user-facing wording lives here, so commands, the dispatcher and the
//! shell only ever deal with typed messages.

use super::types::Message;
use crate::libs::task::{SortOrder, TaskFilter};
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let s = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded => "Task added successfully!".to_string(),
            Message::TaskTextRequired => "Please enter a task!".to_string(),
            Message::TaskCompleted => "Task completed!".to_string(),
            Message::TaskMarkedActive => "Task marked as active!".to_string(),
            Message::TaskUpdated => "Task updated!".to_string(),
            Message::TaskDeleted => "Task deleted!".to_string(),
            Message::TaskNotFound(id) => format!("Task '{}' not found", id),
            Message::TaskDetailsHeader => "Task details:".to_string(),
            Message::TasksHeader(filter, sort) => format!("Tasks ({}, sorted by {}):", filter, sort),
            Message::TasksMatching(query) => format!("Matching \"{}\"", query),
            Message::StatsHeader => "Statistics:".to_string(),
            Message::StatsSummary { total, active, completed } => format!("{} total, {} active, {} completed", total, active, completed),

            // === CLEAR MESSAGES ===
            Message::NoCompletedTasks => "No completed tasks to clear!".to_string(),
            Message::CompletedTasksCleared(count) => format!("Cleared {} completed task(s)!", count),
            Message::NoTasksToClear => "No tasks to clear!".to_string(),
            Message::AllTasksCleared => "All tasks cleared!".to_string(),
            Message::ConfirmClearAll => "Are you sure you want to delete all tasks? This action cannot be undone.".to_string(),
            Message::ClearAllNotConfirmed => "All tasks kept".to_string(),

            // === VIEW MESSAGES ===
            Message::SortedBy(sort) => match sort {
                SortOrder::Newest => "Sorted by newest first".to_string(),
                SortOrder::Oldest => "Sorted by oldest first".to_string(),
                SortOrder::Alphabetical => "Sorted alphabetically".to_string(),
            },
            Message::FilterChanged(filter) => match filter {
                TaskFilter::All => "Showing all tasks".to_string(),
                TaskFilter::Active => "Showing active tasks".to_string(),
                TaskFilter::Completed => "Showing completed tasks".to_string(),
            },
            Message::SearchChanged(query) => format!("Searching for \"{}\"", query),
            Message::SearchCleared => "Search cleared".to_string(),

            // === EMPTY STATE ===
            Message::NoTasksYet => "No tasks yet".to_string(),
            Message::NoTasksYetHint => "Add your first task to get started!".to_string(),
            Message::NoTasksMatch => "No tasks match your filter".to_string(),
            Message::NoTasksMatchHint => "Try changing your filter or add a new task!".to_string(),

            // === THEME MESSAGES ===
            Message::ThemeEnabled { dark } => format!("{} mode enabled", if *dark { "Dark" } else { "Light" }),

            // === EDIT MESSAGES ===
            Message::EditingTask(text) => format!("Editing \"{}\"", text),
            Message::EditCancelled => "Edit cancelled".to_string(),
            Message::NotEditing => "No task is being edited".to_string(),

            // === STORAGE MESSAGES ===
            Message::PersistFailed(error) => format!("Changes could not be saved and are kept for this session only: {}", error),
            Message::StorageOpenFailed(error) => format!("Failed to open task storage: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleDefaults => "New task defaults".to_string(),
            Message::ConfigModuleView => "Initial view".to_string(),
            Message::SamplesSeeded(count) => format!("Added {} sample task(s)", count),

            // === SHELL MESSAGES ===
            Message::ShellWelcome => "taskflow shell. Type 'help' for commands, 'quit' to exit.".to_string(),
            Message::ShellUnknownCommand(error) => format!("Unrecognized command: {}", error),
            Message::ShellGoodbye => "Bye!".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select settings to configure".to_string(),
            Message::PromptDefaultCategory => "Default category".to_string(),
            Message::PromptDefaultPriority => "Default priority".to_string(),
            Message::PromptDefaultFilter => "Initial filter".to_string(),
            Message::PromptDefaultSort => "Initial sort order".to_string(),
            Message::PromptSeedSamples => "Add sample tasks to get started?".to_string(),
            Message::PromptShell => "taskflow> ".to_string(),
        };
        write!(f, "{}", s)
    }
}
