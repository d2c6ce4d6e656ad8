//! Reminder commands

use crate::app::LedgerContext;
use crate::config::TIME_FORMAT;
use crate::database::User;
use crate::error::Result;
use chrono::NaiveTime;
use std::io::Write;

/// Add a reminder for the logged-in user
pub async fn set(
    ctx: &LedgerContext,
    user: &User,
    at: NaiveTime,
    message: &str,
    enabled: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let reminder = ctx
        .reminders()
        .create_reminder(user.id, message, at, enabled)
        .await?;

    writeln!(
        out,
        "reminder added: {} - {} (enabled={})",
        reminder.at.format(TIME_FORMAT),
        reminder.message,
        reminder.enabled
    )?;
    Ok(())
}

/// List all reminders, earliest first
pub async fn list(ctx: &LedgerContext, user: &User, out: &mut dyn Write) -> Result<()> {
    let reminders = ctx.reminders().list_reminders(user.id).await?;

    if reminders.is_empty() {
        writeln!(out, "no reminders")?;
        return Ok(());
    }

    for reminder in &reminders {
        let status = if reminder.enabled { "ON" } else { "OFF" };
        writeln!(
            out,
            "#{}\t{}\t{}\t{}",
            reminder.id,
            reminder.at.format(TIME_FORMAT),
            status,
            reminder.message
        )?;
    }
    Ok(())
}

/// Print enabled reminders
pub async fn emit(ctx: &LedgerContext, user: &User, out: &mut dyn Write) -> Result<()> {
    ctx.reminders().emit_for_user(user.id, out).await?;
    Ok(())
}
