//! Budget rows, one per (user, category)

use super::models::Budget;
use crate::error::{AppError, Result};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct BudgetRepository {
    pool: SqlitePool,
}

impl BudgetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Replace the budget for a category: delete then insert, in one transaction
    pub async fn set(&self, user_id: i64, category: &str, monthly_limit: f64) -> Result<Budget> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM budgets WHERE user_id = ? AND category = ?")
            .bind(user_id)
            .bind(category)
            .execute(&mut *tx)
            .await?;

        let budget = sqlx::query_as::<_, Budget>(
            r#"
            INSERT INTO budgets (user_id, category, monthly_limit)
            VALUES (?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(category)
        .bind(monthly_limit)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!("Set budget: {} = {} for user: {}", category, monthly_limit, user_id);
        Ok(budget)
    }

    /// All budgets of a user, by category
    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Budget>> {
        let budgets = sqlx::query_as::<_, Budget>(
            "SELECT * FROM budgets WHERE user_id = ? ORDER BY category ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(budgets)
    }

    pub async fn get_by_category(&self, user_id: i64, category: &str) -> Result<Option<Budget>> {
        let budget = sqlx::query_as::<_, Budget>(
            "SELECT * FROM budgets WHERE user_id = ? AND category = ?",
        )
        .bind(user_id)
        .bind(category)
        .fetch_optional(&self.pool)
        .await?;

        Ok(budget)
    }

    pub async fn update_limit(&self, budget_id: i64, monthly_limit: f64) -> Result<()> {
        let rows = sqlx::query("UPDATE budgets SET monthly_limit = ? WHERE id = ?")
            .bind(monthly_limit)
            .bind(budget_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(AppError::NotFound(format!("budget #{}", budget_id)));
        }

        tracing::debug!("Updated budget {} limit to {}", budget_id, monthly_limit);
        Ok(())
    }
}
