use super::open_session;
use crate::libs::messages::Message;
use crate::libs::stats::Stats;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let session = open_session()?;

    msg_print!(Message::StatsHeader, true);
    View::stats(&Stats::collect(session.store().tasks()));
    Ok(())
}
