//! Maps user intents onto task store mutations.
//!
//! The [`Dispatcher`] is the only thing a front end talks to. It owns the
//! [`TaskStore`], the session's [`ViewParams`] and the edit state machine,
//! and answers every [`Intent`] with an optional [`Notification`] for the
//! user. [`Dispatcher::render`] produces everything needed to draw the list.
//!
//! ## Edit state machine
//!
//! ```text
//!            StartEdit(x)                      StartEdit(y), y != x
//!   Idle ──────────────────▶ Editing(x) ─────────────────────────────▶ Editing(y)
//!    ▲                        │    ▲   (x's draft is committed first)
//!    │  CommitEdit/CancelEdit │    │ EditDraft(text)
//!    └────────────────────────┘    └─────────┘
//! ```
//!
//! Committing saves the draft when it is non-empty and differs from the
//! stored text; otherwise the draft is dropped. Only one task is ever in
//! `Editing`. A `CommitEdit` aimed at a different task saves the open draft
//! before applying its own text.

use super::config::DefaultsConfig;
use super::error::TaskError;
use super::messages::Message;
use super::stats::Stats;
use super::storage::Storage;
use super::store::{Cleared, EditOutcome, TaskStore};
use super::task::{Priority, Task, TaskFilter};
use super::view::{capitalize, normalize_query, project, ViewParams};
use crate::{msg_success, msg_warning};
use chrono::Local;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add {
        text: String,
        category: Option<String>,
        priority: Option<Priority>,
    },
    Toggle(String),
    StartEdit(String),
    EditDraft(String),
    CommitEdit {
        id: String,
        text: String,
    },
    CancelEdit,
    Delete(String),
    SetFilter(TaskFilter),
    SetSearch(String),
    CycleSort,
    ClearCompleted,
    ClearAll {
        confirmed: bool,
    },
    ToggleTheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: Message,
}

impl Notification {
    pub fn success(message: Message) -> Self {
        Self {
            severity: Severity::Success,
            message,
        }
    }

    pub fn warning(message: Message) -> Self {
        Self {
            severity: Severity::Warning,
            message,
        }
    }

    pub fn print(&self) {
        match self.severity {
            Severity::Success => msg_success!(self.message),
            Severity::Warning => msg_warning!(self.message),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing {
        id: String,
        draft: String,
    },
}

/// Why the rendered list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoTasks,
    NoMatches,
}

impl EmptyState {
    pub fn title(&self) -> Message {
        match self {
            EmptyState::NoTasks => Message::NoTasksYet,
            EmptyState::NoMatches => Message::NoTasksMatch,
        }
    }

    pub fn hint(&self) -> Message {
        match self {
            EmptyState::NoTasks => Message::NoTasksYetHint,
            EmptyState::NoMatches => Message::NoTasksMatchHint,
        }
    }
}

#[derive(Debug)]
pub struct Render<'a> {
    pub tasks: Vec<&'a Task>,
    pub stats: Stats,
    pub params: &'a ViewParams,
    pub empty_state: Option<EmptyState>,
    pub dark_mode: bool,
}

/// Display-ready description of a single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    pub text: String,
    pub status: String,
    pub category: String,
    pub priority: String,
    pub created: String,
}

pub struct Dispatcher<S: Storage> {
    store: TaskStore<S>,
    params: ViewParams,
    edit: EditState,
    defaults: DefaultsConfig,
}

impl<S: Storage> Dispatcher<S> {
    pub fn new(store: TaskStore<S>) -> Self {
        Self {
            store,
            params: ViewParams::default(),
            edit: EditState::Idle,
            defaults: DefaultsConfig::default(),
        }
    }

    pub fn with_params(mut self, params: ViewParams) -> Self {
        self.params = params;
        self
    }

    /// Category and priority applied when an `Add` intent leaves them unset.
    pub fn with_defaults(mut self, defaults: DefaultsConfig) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore<S> {
        &mut self.store
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    pub fn edit_state(&self) -> &EditState {
        &self.edit
    }

    pub fn dispatch(&mut self, intent: Intent) -> Option<Notification> {
        debug!(?intent, "dispatching intent");
        let notification = match intent {
            Intent::Add { text, category, priority } => self.add(&text, category, priority),
            Intent::Toggle(id) => self.toggle(&id),
            Intent::StartEdit(id) => self.start_edit(&id),
            Intent::EditDraft(text) => self.edit_draft(text),
            Intent::CommitEdit { id, text } => self.commit_edit(&id, &text),
            Intent::CancelEdit => {
                self.edit = EditState::Idle;
                None
            }
            Intent::Delete(id) => self.delete(&id),
            Intent::SetFilter(filter) => {
                self.params.filter = filter;
                None
            }
            Intent::SetSearch(query) => {
                self.params.search = normalize_query(&query);
                None
            }
            Intent::CycleSort => {
                self.params.sort = self.params.sort.next();
                Some(Notification::success(Message::SortedBy(self.params.sort)))
            }
            Intent::ClearCompleted => self.clear_completed(),
            Intent::ClearAll { confirmed } => self.clear_all(confirmed),
            Intent::ToggleTheme => {
                let dark = self.store.toggle_dark_mode();
                Some(Notification::success(Message::ThemeEnabled { dark }))
            }
        };

        // A failed write overrides the intent's own feedback.
        match self.store.take_persist_error() {
            Some(e) => Some(Notification::warning(Message::PersistFailed(e.to_string()))),
            None => notification,
        }
    }

    pub fn render(&self) -> Render<'_> {
        let tasks = project(self.store.tasks(), &self.params);
        let empty_state = if self.store.is_empty() {
            Some(EmptyState::NoTasks)
        } else if tasks.is_empty() {
            Some(EmptyState::NoMatches)
        } else {
            None
        };

        Render {
            tasks,
            stats: Stats::collect(self.store.tasks()),
            params: &self.params,
            empty_state,
            dark_mode: self.store.dark_mode(),
        }
    }

    pub fn details(&self, id: &str) -> Option<TaskDetails> {
        let task = self.store.get(id)?;
        Some(TaskDetails {
            text: task.text.clone(),
            status: task.status().to_string(),
            category: capitalize(&task.category),
            priority: capitalize(task.priority.as_str()),
            created: task.created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
        })
    }

    fn add(&mut self, text: &str, category: Option<String>, priority: Option<Priority>) -> Option<Notification> {
        let category = category.filter(|c| !c.trim().is_empty()).or_else(|| self.defaults.category.clone());
        let priority = priority.or(self.defaults.priority);

        match self.store.add(text, category.as_deref(), priority) {
            Ok(_) => Some(Notification::success(Message::TaskAdded)),
            Err(TaskError::Validation) => Some(Notification::warning(Message::TaskTextRequired)),
            Err(e) => Some(Notification::warning(Message::PersistFailed(e.to_string()))),
        }
    }

    fn toggle(&mut self, id: &str) -> Option<Notification> {
        match self.store.toggle(id) {
            Ok(true) => Some(Notification::success(Message::TaskCompleted)),
            Ok(false) => Some(Notification::success(Message::TaskMarkedActive)),
            Err(e) => stale(e),
        }
    }

    fn start_edit(&mut self, id: &str) -> Option<Notification> {
        let text = match self.store.get(id) {
            Some(task) => task.text.clone(),
            None => return stale(TaskError::NotFound(id.to_string())),
        };

        let notification = match std::mem::take(&mut self.edit) {
            // Starting an edit on the task already being edited saves it.
            EditState::Editing { id: current, draft } if current == id => return self.commit_draft(&current, &draft),
            EditState::Editing { id: current, draft } => self.commit_draft(&current, &draft),
            EditState::Idle => None,
        };

        self.edit = EditState::Editing {
            id: id.to_string(),
            draft: text,
        };
        notification
    }

    fn edit_draft(&mut self, text: String) -> Option<Notification> {
        if let EditState::Editing { draft, .. } = &mut self.edit {
            *draft = text;
        }
        None
    }

    fn commit_edit(&mut self, id: &str, text: &str) -> Option<Notification> {
        // A draft open on another task is saved, not lost.
        let pending = match std::mem::take(&mut self.edit) {
            EditState::Editing { id: current, draft } if current != id => self.commit_draft(&current, &draft),
            _ => None,
        };

        let notification = match self.store.edit(id, text) {
            Ok(EditOutcome::Updated) => Some(Notification::success(Message::TaskUpdated)),
            Ok(EditOutcome::Unchanged) => None,
            Err(TaskError::Validation) => Some(Notification::warning(Message::TaskTextRequired)),
            Err(e) => stale(e),
        };
        notification.or(pending)
    }

    // Implicit commit: an empty or unchanged draft is dropped without a warning.
    fn commit_draft(&mut self, id: &str, draft: &str) -> Option<Notification> {
        self.edit = EditState::Idle;
        if draft.trim().is_empty() {
            return None;
        }
        match self.store.edit(id, draft) {
            Ok(EditOutcome::Updated) => Some(Notification::success(Message::TaskUpdated)),
            Ok(EditOutcome::Unchanged) => None,
            Err(e) => stale(e),
        }
    }

    fn delete(&mut self, id: &str) -> Option<Notification> {
        match self.store.remove(id) {
            Ok(_) => {
                self.drop_stale_edit();
                Some(Notification::success(Message::TaskDeleted))
            }
            Err(e) => stale(e),
        }
    }

    fn clear_completed(&mut self) -> Option<Notification> {
        match self.store.remove_completed() {
            Cleared::Nothing => Some(Notification::warning(Message::NoCompletedTasks)),
            Cleared::Removed(count) => {
                self.drop_stale_edit();
                Some(Notification::success(Message::CompletedTasksCleared(count)))
            }
        }
    }

    fn clear_all(&mut self, confirmed: bool) -> Option<Notification> {
        if self.store.is_empty() {
            return Some(Notification::warning(Message::NoTasksToClear));
        }
        if !confirmed {
            return None;
        }

        self.store.remove_all();
        self.edit = EditState::Idle;
        Some(Notification::success(Message::AllTasksCleared))
    }

    fn drop_stale_edit(&mut self) {
        if let EditState::Editing { id, .. } = &self.edit {
            if self.store.get(id).is_none() {
                self.edit = EditState::Idle;
            }
        }
    }
}

// Ids come from the rendered list, so a missing one means the view was stale.
fn stale(error: TaskError) -> Option<Notification> {
    debug!(error = %error, "ignoring intent for stale task");
    None
}
