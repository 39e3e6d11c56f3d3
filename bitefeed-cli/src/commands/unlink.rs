//! Unlink command - remove the stored bank link

use anyhow::Result;
use dialoguer::Confirm;

use crate::output::{success, warning};

use super::{current_user, get_context};

pub fn run(force: bool) -> Result<()> {
    let ctx = get_context()?;
    let user = current_user(&ctx)?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove the bank link for {}?", user.email))
            .default(false)
            .interact()?;
        if !confirmed {
            warning("Aborted");
            return Ok(());
        }
    }

    if ctx.link_service.unlink(user.id)? {
        success("Bank link removed");
    } else {
        warning("No bank link was stored");
    }

    Ok(())
}
