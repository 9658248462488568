use super::{open_session, resolve_id};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task id or unique id prefix
    #[arg(required = true)]
    id: String,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let session = open_session()?;

    match resolve_id(session.store(), &args.id).and_then(|id| session.details(&id)) {
        Some(details) => {
            msg_print!(Message::TaskDetailsHeader, true);
            View::details(&details);
        }
        None => msg_warning!(Message::TaskNotFound(args.id)),
    }

    Ok(())
}
