//! Reminder rows

use super::models::{NewReminder, Reminder};
use crate::error::Result;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct ReminderRepository {
    pool: SqlitePool,
}

impl ReminderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a reminder
    pub async fn add(&self, req: &NewReminder) -> Result<Reminder> {
        let reminder = sqlx::query_as::<_, Reminder>(
            r#"
            INSERT INTO reminders (user_id, message, at, enabled)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(req.user_id)
        .bind(&req.message)
        .bind(req.at)
        .bind(req.enabled)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created reminder: {} for user: {}", reminder.id, reminder.user_id);
        Ok(reminder)
    }

    /// All reminders of a user, earliest time of day first
    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Reminder>> {
        let reminders = sqlx::query_as::<_, Reminder>(
            "SELECT * FROM reminders WHERE user_id = ? ORDER BY at ASC, id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reminders)
    }

    /// Enabled reminders of a user, earliest time of day first
    pub async fn list_enabled(&self, user_id: i64) -> Result<Vec<Reminder>> {
        let reminders = sqlx::query_as::<_, Reminder>(
            "SELECT * FROM reminders WHERE user_id = ? AND enabled = 1 ORDER BY at ASC, id ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(reminders)
    }
}
