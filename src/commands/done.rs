use super::{dispatch_for_id, open_session};
use crate::libs::dispatcher::Intent;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task id or unique id prefix
    #[arg(required = true)]
    id: String,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    let mut session = open_session()?;
    dispatch_for_id(&mut session, &args.id, Intent::Toggle);
    Ok(())
}
