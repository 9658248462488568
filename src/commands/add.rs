use super::open_session;
use crate::libs::dispatcher::Intent;
use crate::libs::task::Priority;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task text
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,

    /// Category tag, e.g. work, personal, other
    #[arg(short, long)]
    category: Option<String>,

    /// Task priority
    #[arg(short, long, value_enum)]
    priority: Option<Priority>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut session = open_session()?;

    let intent = Intent::Add {
        text: args.text.join(" "),
        category: args.category,
        priority: args.priority,
    };
    if let Some(notification) = session.dispatch(intent) {
        notification.print();
    }

    Ok(())
}
