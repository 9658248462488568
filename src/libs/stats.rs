use super::task::Task;

/// Counts over the whole collection, independent of any view parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

impl Stats {
    pub fn collect(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();

        Stats {
            total,
            completed,
            active: total - completed,
        }
    }
}
