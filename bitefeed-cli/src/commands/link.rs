//! Link command - connect a bank account and remember the user

use anyhow::Result;
use colored::Colorize;
use uuid::Uuid;

use bitefeed_core::config::UserSettings;
use bitefeed_core::services::LogEvent;
use bitefeed_core::User;

use super::{get_bitefeed_dir, get_context, get_logger, log_event};

pub fn run(email: &str, name: &str, public_token: &str, json: bool) -> Result<()> {
    let ctx = get_context()?;
    let logger = get_logger();

    // Reuse the remembered user id when linking the same email again, so
    // relinking doesn't orphan previously ingested data.
    let user_id = match &ctx.config.default_user {
        Some(existing) if existing.email == email => existing.id,
        _ => Uuid::new_v4(),
    };
    let user = User::new(user_id, email, name);

    let result = ctx
        .link_service
        .link(&user, public_token, &serde_json::json!({}))?;

    // Remember the user for later commands
    let mut config = ctx.config.clone();
    config.default_user = Some(UserSettings {
        id: user.id,
        email: email.to_string(),
        name: name.to_string(),
    });
    config.save(&get_bitefeed_dir())?;

    log_event(
        &logger,
        LogEvent::new("link_completed")
            .with_provider(&result.provider)
            .with_command("link"),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{} {}", "Linked:".green(), result.provider);
    println!("  User: {} <{}>", name, email);
    println!("  Run 'bite sync' to import transactions.");

    Ok(())
}
