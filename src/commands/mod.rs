pub mod add;
pub mod clear;
pub mod delete;
pub mod done;
pub mod edit;
pub mod init;
pub mod list;
pub mod shell;
pub mod show;
pub mod stats;
pub mod theme;

use crate::db::storage::SqliteStorage;
use crate::libs::config::Config;
use crate::libs::dispatcher::{Dispatcher, Intent};
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::libs::store::TaskStore;
use crate::{msg_error_anyhow, msg_warning};
use anyhow::Result;
use clap::{Parser, Subcommand};

include!(concat!(env!("OUT_DIR"), "/app_metadata.rs"));

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configure task defaults and the initial view")]
    Init(init::InitArgs),
    #[command(about = "Add a task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "List tasks", alias = "ls")]
    List(list::ListArgs),
    #[command(about = "Toggle a task between active and completed", alias = "toggle")]
    Done(done::DoneArgs),
    #[command(about = "Change the text of a task", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task", alias = "rm")]
    Delete(delete::DeleteArgs),
    #[command(about = "Show task details")]
    Show(show::ShowArgs),
    #[command(about = "Clear completed tasks, or all tasks with --all")]
    Clear(clear::ClearArgs),
    #[command(about = "Show task statistics")]
    Stats,
    #[command(about = "Toggle between light and dark theme")]
    Theme,
    #[command(about = "Start an interactive session")]
    Shell,
}

#[derive(Debug, Parser)]
#[command(name = APP_METADATA_NAME, version = APP_METADATA_VERSION, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Show(args) => show::cmd(args),
            Commands::Clear(args) => clear::cmd(args),
            Commands::Stats => stats::cmd(),
            Commands::Theme => theme::cmd(),
            Commands::Shell => shell::cmd(),
        }
    }
}

/// Opens the persisted store and wraps it in a dispatcher configured from `config.json`.
pub fn open_session() -> Result<Dispatcher<SqliteStorage>> {
    let config = Config::read()?;
    let storage = SqliteStorage::new().map_err(|e| msg_error_anyhow!(Message::StorageOpenFailed(e.to_string())))?;

    Ok(Dispatcher::new(TaskStore::load(storage))
        .with_params(config.view_params())
        .with_defaults(config.defaults()))
}

/// Resolves a full id or a unique id prefix typed by the user.
pub fn resolve_id<S: Storage>(store: &TaskStore<S>, input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Some(task) = store.get(input) {
        return Some(task.id.clone());
    }

    let mut matches = store.tasks().iter().filter(|t| t.id.starts_with(input));
    match (matches.next(), matches.next()) {
        (Some(task), None) => Some(task.id.clone()),
        _ => None,
    }
}

/// Dispatches an intent that targets a user-supplied id, warning when it doesn't resolve.
pub(crate) fn dispatch_for_id<S: Storage>(session: &mut Dispatcher<S>, input: &str, intent: impl FnOnce(String) -> Intent) {
    match resolve_id(session.store(), input) {
        Some(id) => {
            if let Some(notification) = session.dispatch(intent(id)) {
                notification.print();
            }
        }
        None => msg_warning!(Message::TaskNotFound(input.to_string())),
    }
}
