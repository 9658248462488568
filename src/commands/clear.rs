use super::open_session;
use crate::libs::dispatcher::Intent;
use crate::libs::messages::Message;
use crate::msg_info;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Delete every task instead of only the completed ones
    #[arg(long)]
    all: bool,

    /// Skip the confirmation prompt for --all
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: ClearArgs) -> Result<()> {
    let mut session = open_session()?;

    let intent = if args.all {
        Intent::ClearAll {
            confirmed: session.store().is_empty() || confirm_clear_all(args.yes)?,
        }
    } else {
        Intent::ClearCompleted
    };

    match session.dispatch(intent) {
        Some(notification) => notification.print(),
        None => msg_info!(Message::ClearAllNotConfirmed),
    }
    Ok(())
}

/// Asks before deleting everything, unless `--yes` was given.
pub fn confirm_clear_all(yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmClearAll.to_string())
        .default(false)
        .interact()?;
    Ok(confirmed)
}
