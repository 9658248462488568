//! Projection of the task collection into what gets displayed, and the
//! terminal tables that display it.
//!
//! [`project`] is a pure pipeline: status filter, then search, then a stable
//! sort. It borrows the collection and never reorders or mutates it.

use super::dispatcher::TaskDetails;
use super::stats::Stats;
use super::task::{SortOrder, Task, TaskFilter};
use chrono::Local;
use prettytable::{row, Table};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewParams {
    pub filter: TaskFilter,
    pub search: String,
    pub sort: SortOrder,
}

impl ViewParams {
    pub fn new(filter: TaskFilter, search: &str, sort: SortOrder) -> Self {
        Self {
            filter,
            search: normalize_query(search),
            sort,
        }
    }
}

/// Trimmed, lower-cased search query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

pub fn project<'a>(tasks: &'a [Task], params: &ViewParams) -> Vec<&'a Task> {
    let query = normalize_query(&params.search);

    let mut visible: Vec<&Task> = tasks
        .iter()
        .filter(|t| params.filter.matches(t))
        .filter(|t| query.is_empty() || matches_query(t, &query))
        .collect();

    // sort_by is stable: equal keys keep storage order
    match params.sort {
        SortOrder::Newest => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => visible.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::Alphabetical => visible.sort_by(|a, b| locale_cmp(&a.text, &b.text)),
    }

    visible
}

fn matches_query(task: &Task, query: &str) -> bool {
    task.text.to_lowercase().contains(query) || task.category.to_lowercase().contains(query) || task.priority.as_str().contains(query)
}

/// Collation-style ordering in three passes: base letters (accents and case
/// folded away), then accents, then lower case ahead of upper case.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| decomposed_lower(a).cmp(&decomposed_lower(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(text: &str) -> String {
    text.nfd().filter(|c| !is_combining_mark(*c)).collect::<String>().to_lowercase()
}

fn decomposed_lower(text: &str) -> String {
    text.nfd().collect::<String>().to_lowercase()
}

/// Upper-cases the first character, as shown in tables and details.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub struct View {}

impl View {
    pub fn tasks(tasks: &[&Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "", "TASK", "CATEGORY", "PRIORITY", "CREATED"]);
        for task in tasks {
            let check = if task.completed { "✔" } else { " " };
            table.add_row(row![
                task.id,
                check,
                task.text,
                capitalize(&task.category),
                capitalize(task.priority.as_str()),
                task.created_at.with_timezone(&Local).format("%Y-%m-%d")
            ]);
        }
        table.printstd();
    }

    pub fn details(details: &TaskDetails) {
        let mut table = Table::new();

        table.add_row(row!["Task", details.text]);
        table.add_row(row!["Status", details.status]);
        table.add_row(row!["Category", details.category]);
        table.add_row(row!["Priority", details.priority]);
        table.add_row(row!["Created", details.created]);
        table.printstd();
    }

    pub fn stats(stats: &Stats) {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "ACTIVE", "COMPLETED"]);
        table.add_row(row![stats.total, stats.active, stats.completed]);
        table.printstd();
    }
}
