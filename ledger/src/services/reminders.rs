//! Reminders service
//!
//! Stores time-of-day reminders and emits the enabled ones as console lines.
//! There is no scheduler: `emit` is called on demand.

use crate::config::TIME_FORMAT;
use crate::database::{NewReminder, Reminder, ReminderRepository};
use crate::error::{AppError, Result};
use chrono::NaiveTime;
use std::io::Write;

/// `HH:MM:SS - message`
pub fn format_line(reminder: &Reminder) -> String {
    format!("{} - {}", reminder.at.format(TIME_FORMAT), reminder.message)
}

/// Write one line per enabled reminder, in input order. Disabled ones are
/// skipped. Returns the number of lines written.
pub fn emit(reminders: &[Reminder], out: &mut dyn Write) -> Result<usize> {
    let mut emitted = 0;

    for reminder in reminders.iter().filter(|r| r.enabled) {
        writeln!(out, "[reminder] {}", format_line(reminder))?;
        emitted += 1;
    }

    tracing::debug!("Emitted {} of {} reminders", emitted, reminders.len());
    Ok(emitted)
}

/// Service for managing reminders
#[derive(Clone)]
pub struct RemindersService {
    repo: ReminderRepository,
}

impl RemindersService {
    pub fn new(repo: ReminderRepository) -> Self {
        Self { repo }
    }

    /// Create a new reminder
    pub async fn create_reminder(
        &self,
        user_id: i64,
        message: &str,
        at: NaiveTime,
        enabled: bool,
    ) -> Result<Reminder> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AppError::Validation("reminder message required".to_string()));
        }

        tracing::info!("Creating reminder for user {} at {}", user_id, at);

        self.repo
            .add(&NewReminder {
                user_id,
                message: message.to_string(),
                at,
                enabled,
            })
            .await
    }

    /// All reminders, earliest first
    pub async fn list_reminders(&self, user_id: i64) -> Result<Vec<Reminder>> {
        self.repo.list_by_user(user_id).await
    }

    /// Emit the user's enabled reminders
    pub async fn emit_for_user(&self, user_id: i64, out: &mut dyn Write) -> Result<usize> {
        let reminders = self.repo.list_enabled(user_id).await?;
        emit(&reminders, out)
    }
}
