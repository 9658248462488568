use thiserror::Error;

/// Failures raised by the task store and its storage backends.
///
/// None of these are fatal: validation and missing ids leave state untouched,
/// and persistence failures leave the in-memory collection authoritative.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("task text must not be empty")]
    Validation,

    #[error("task '{0}' not found")]
    NotFound(String),

    #[error("failed to persist tasks: {0}")]
    Persistence(String),

    #[error("storage error: {0}")]
    Storage(String),
}

impl From<rusqlite::Error> for TaskError {
    fn from(err: rusqlite::Error) -> Self {
        TaskError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for TaskError {
    fn from(err: serde_json::Error) -> Self {
        TaskError::Storage(err.to_string())
    }
}

pub type TaskResult<T> = Result<T, TaskError>;
