use crate::libs::task::{SortOrder, TaskFilter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded,
    TaskTextRequired,
    TaskCompleted,
    TaskMarkedActive,
    TaskUpdated,
    TaskDeleted,
    TaskNotFound(String), // id
    TaskDetailsHeader,
    TasksHeader(TaskFilter, SortOrder),
    TasksMatching(String), // query
    StatsHeader,
    StatsSummary {
        total: usize,
        active: usize,
        completed: usize,
    },

    // === CLEAR MESSAGES ===
    NoCompletedTasks,
    CompletedTasksCleared(usize), // count
    NoTasksToClear,
    AllTasksCleared,
    ConfirmClearAll,
    ClearAllNotConfirmed,

    // === VIEW MESSAGES ===
    SortedBy(SortOrder),
    FilterChanged(TaskFilter),
    SearchChanged(String),
    SearchCleared,

    // === EMPTY STATE ===
    NoTasksYet,
    NoTasksYetHint,
    NoTasksMatch,
    NoTasksMatchHint,

    // === THEME MESSAGES ===
    ThemeEnabled { dark: bool },

    // === EDIT MESSAGES ===
    EditingTask(String), // text
    EditCancelled,
    NotEditing,

    // === STORAGE MESSAGES ===
    PersistFailed(String), // error
    StorageOpenFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleDefaults,
    ConfigModuleView,
    SamplesSeeded(usize),

    // === SHELL MESSAGES ===
    ShellWelcome,
    ShellUnknownCommand(String),
    ShellGoodbye,

    // === PROMPTS ===
    PromptSelectModules,
    PromptDefaultCategory,
    PromptDefaultPriority,
    PromptDefaultFilter,
    PromptDefaultSort,
    PromptSeedSamples,
    PromptShell,
}
