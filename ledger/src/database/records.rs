//! Income/expense record rows

use super::models::{NewRecord, Record};
use crate::error::Result;
use chrono::NaiveDate;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct RecordRepository {
    pool: SqlitePool,
}

impl RecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a record and return it with its assigned id
    pub async fn add(&self, req: &NewRecord) -> Result<Record> {
        let record = sqlx::query_as::<_, Record>(
            r#"
            INSERT INTO records (user_id, rtype, category, amount, occurred_on, note)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(req.user_id)
        .bind(req.rtype)
        .bind(&req.category)
        .bind(req.amount)
        .bind(req.occurred_on)
        .bind(&req.note)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!("Created record: {} for user: {}", record.id, record.user_id);
        Ok(record)
    }

    /// Records with `start <= occurred_on < end`, oldest first
    pub async fn list_by_period(
        &self,
        user_id: i64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Record>> {
        let records = sqlx::query_as::<_, Record>(
            r#"
            SELECT * FROM records
            WHERE user_id = ? AND occurred_on >= ? AND occurred_on < ?
            ORDER BY occurred_on ASC, id ASC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Every record of a user, oldest first
    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Record>> {
        let records = sqlx::query_as::<_, Record>(
            r#"
            SELECT * FROM records
            WHERE user_id = ?
            ORDER BY occurred_on ASC, id ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    /// Records whose category or note contains `keyword`, newest first
    pub async fn search(&self, user_id: i64, keyword: &str) -> Result<Vec<Record>> {
        let pattern = format!("%{}%", keyword);

        let records = sqlx::query_as::<_, Record>(
            r#"
            SELECT * FROM records
            WHERE user_id = ? AND (category LIKE ? OR note LIKE ?)
            ORDER BY occurred_on DESC, id DESC
            "#,
        )
        .bind(user_id)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
