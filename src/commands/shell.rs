//! Interactive session.
//!
//! Unlike the one-shot commands, the shell keeps one dispatcher alive, so
//! filter, search, sort order and the task being edited carry over from one
//! line to the next. Each line is parsed with clap, turned into an intent,
//! and the list is re-rendered after every change.

use super::{clear::confirm_clear_all, list, open_session, resolve_id};
use crate::libs::dispatcher::{Dispatcher, EditState, Intent};
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::libs::task::{Priority, TaskFilter};
use crate::libs::view::View;
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};

#[derive(Debug, Parser)]
#[command(name = "taskflow", no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum ShellCommand {
    /// Add a task
    Add {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long, value_enum)]
        priority: Option<Priority>,
    },
    /// Toggle a task between active and completed
    #[command(alias = "toggle")]
    Done { id: String },
    /// Start editing a task (saves the task currently being edited)
    Edit { id: String },
    /// Replace the text being edited
    Draft {
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },
    /// Save the edit, optionally with new text
    Save {
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },
    /// Discard the edit
    Cancel,
    /// Delete a task
    #[command(alias = "rm")]
    Delete { id: String },
    /// Show task details
    Show { id: String },
    /// Show all, active or completed tasks
    Filter {
        #[arg(value_enum)]
        filter: TaskFilter,
    },
    /// Search text, category and priority; no query clears the search
    Search {
        #[arg(num_args = 0..)]
        query: Vec<String>,
    },
    /// Cycle the sort order: newest, oldest, alphabetical
    Sort,
    /// Clear completed tasks, or all tasks with --all
    Clear {
        #[arg(long)]
        all: bool,
    },
    /// Toggle between light and dark theme
    Theme,
    /// Print the list again
    #[command(alias = "ls")]
    List,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// What the shell should do after handling a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Render,
    Stay,
    Quit,
}

pub fn cmd() -> Result<()> {
    let mut session = open_session()?;

    msg_info!(Message::ShellWelcome);
    list::render(&session);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", Message::PromptShell);
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand) => {
                let _ = e.print();
                continue;
            }
            Err(e) => {
                let reason = e.to_string();
                let reason = reason.lines().next().unwrap_or_default().trim_start_matches("error: ");
                msg_warning!(Message::ShellUnknownCommand(reason.to_string()));
                continue;
            }
        };

        match execute(&mut session, command)? {
            Flow::Render => list::render(&session),
            Flow::Stay => {}
            Flow::Quit => break,
        }
    }

    msg_print!(Message::ShellGoodbye);
    Ok(())
}

/// Applies one shell command to the session.
pub fn execute<S: Storage>(session: &mut Dispatcher<S>, command: ShellCommand) -> Result<Flow> {
    let intent = match command {
        ShellCommand::Add { text, category, priority } => Intent::Add {
            text: text.join(" "),
            category,
            priority,
        },
        ShellCommand::Done { id } => match resolve(session, &id) {
            Some(id) => Intent::Toggle(id),
            None => return Ok(Flow::Stay),
        },
        ShellCommand::Edit { id } => match resolve(session, &id) {
            Some(id) => Intent::StartEdit(id),
            None => return Ok(Flow::Stay),
        },
        ShellCommand::Draft { text } => {
            if *session.edit_state() == EditState::Idle {
                msg_warning!(Message::NotEditing);
                return Ok(Flow::Stay);
            }
            Intent::EditDraft(text.join(" "))
        }
        ShellCommand::Save { text } => match session.edit_state() {
            EditState::Editing { id, draft } => Intent::CommitEdit {
                id: id.clone(),
                text: if text.is_empty() { draft.clone() } else { text.join(" ") },
            },
            EditState::Idle => {
                msg_warning!(Message::NotEditing);
                return Ok(Flow::Stay);
            }
        },
        ShellCommand::Cancel => {
            if *session.edit_state() == EditState::Idle {
                msg_warning!(Message::NotEditing);
                return Ok(Flow::Stay);
            }
            session.dispatch(Intent::CancelEdit);
            msg_info!(Message::EditCancelled);
            return Ok(Flow::Stay);
        }
        ShellCommand::Delete { id } => match resolve(session, &id) {
            Some(id) => Intent::Delete(id),
            None => return Ok(Flow::Stay),
        },
        ShellCommand::Show { id } => {
            if let Some(details) = resolve(session, &id).and_then(|id| session.details(&id)) {
                msg_print!(Message::TaskDetailsHeader, true);
                View::details(&details);
            }
            return Ok(Flow::Stay);
        }
        ShellCommand::Filter { filter } => {
            msg_info!(Message::FilterChanged(filter));
            Intent::SetFilter(filter)
        }
        ShellCommand::Search { query } => {
            let query = query.join(" ");
            if query.trim().is_empty() {
                msg_info!(Message::SearchCleared);
            } else {
                msg_info!(Message::SearchChanged(query.trim().to_string()));
            }
            Intent::SetSearch(query)
        }
        ShellCommand::Sort => Intent::CycleSort,
        ShellCommand::Clear { all: false } => Intent::ClearCompleted,
        ShellCommand::Clear { all: true } => {
            let confirmed = session.store().is_empty() || confirm_clear_all(false)?;
            if !confirmed {
                msg_info!(Message::ClearAllNotConfirmed);
                return Ok(Flow::Stay);
            }
            Intent::ClearAll { confirmed }
        }
        ShellCommand::Theme => Intent::ToggleTheme,
        ShellCommand::List => return Ok(Flow::Render),
        ShellCommand::Quit => return Ok(Flow::Quit),
    };

    let editing = matches!(intent, Intent::StartEdit(_));
    if let Some(notification) = session.dispatch(intent) {
        notification.print();
    }

    if editing {
        if let EditState::Editing { draft, .. } = session.edit_state() {
            msg_info!(Message::EditingTask(draft.clone()));
            return Ok(Flow::Stay);
        }
    }
    Ok(Flow::Render)
}

fn resolve<S: Storage>(session: &Dispatcher<S>, input: &str) -> Option<String> {
    let id = resolve_id(session.store(), input);
    if id.is_none() {
        msg_warning!(Message::TaskNotFound(input.to_string()));
    }
    id
}
