//! List tasks through the view pipeline.
//!
//! Filter and sort default to the configured initial view; the search query
//! matches text, category and priority case-insensitively.

use super::open_session;
use crate::libs::dispatcher::{Dispatcher, Intent};
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::libs::task::{SortOrder, TaskFilter};
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Which tasks to show
    #[arg(short, long, value_enum)]
    filter: Option<TaskFilter>,

    /// Case-insensitive search over text, category and priority
    #[arg(short, long)]
    search: Option<String>,

    /// Sort order
    #[arg(long, value_enum)]
    sort: Option<SortOrder>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let mut session = open_session()?;

    if let Some(filter) = args.filter {
        session.dispatch(Intent::SetFilter(filter));
    }
    if let Some(search) = args.search {
        session.dispatch(Intent::SetSearch(search));
    }
    if let Some(sort) = args.sort {
        // Sort is cyclic; step until the requested order comes round
        while session.params().sort != sort {
            session.dispatch(Intent::CycleSort);
        }
    }

    render(&session);
    Ok(())
}

/// Prints the projected list, or the empty state, followed by the counts.
pub fn render<S: Storage>(session: &Dispatcher<S>) {
    let render = session.render();

    msg_print!(Message::TasksHeader(render.params.filter, render.params.sort), true);
    if !render.params.search.is_empty() {
        msg_print!(Message::TasksMatching(render.params.search.clone()));
    }

    match render.empty_state {
        Some(empty) => {
            msg_info!(empty.title());
            msg_print!(empty.hint());
        }
        None => View::tasks(&render.tasks),
    }

    msg_print!(Message::StatsSummary {
        total: render.stats.total,
        active: render.stats.active,
        completed: render.stats.completed,
    });
}
