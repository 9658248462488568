//! Configuration initialization command.
//!
//! Runs the interactive setup wizard, then offers to seed the welcome tasks
//! when the task list is still empty.

use super::open_session;
use crate::{
    libs::{config::Config, messages::Message},
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Add the sample tasks without asking
    #[arg(short, long)]
    samples: bool,

    /// Skip the configuration wizard
    #[arg(long)]
    no_config: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if !init_args.no_config {
        Config::init()?.save()?;
        msg_success!(Message::ConfigSaved);
    }

    let mut session = open_session()?;
    if !session.store().is_empty() {
        return Ok(());
    }

    let seed = init_args.samples
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSeedSamples.to_string())
            .default(true)
            .interact()?;
    if seed {
        let added = session.store_mut().seed_samples();
        match session.store_mut().take_persist_error() {
            Some(e) => msg_warning!(Message::PersistFailed(e.to_string())),
            None => msg_success!(Message::SamplesSeeded(added)),
        }
    }

    Ok(())
}
