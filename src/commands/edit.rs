use super::{dispatch_for_id, open_session};
use crate::libs::dispatcher::Intent;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id or unique id prefix
    id: String,

    /// New task text
    #[arg(required = true, num_args = 1..)]
    text: Vec<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut session = open_session()?;
    let text = args.text.join(" ");
    dispatch_for_id(&mut session, &args.id, |id| Intent::CommitEdit { id, text });
    Ok(())
}
