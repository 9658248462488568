use super::open_session;
use crate::libs::dispatcher::Intent;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut session = open_session()?;
    if let Some(notification) = session.dispatch(Intent::ToggleTheme) {
        notification.print();
    }
    Ok(())
}
