//! Repository layer for database operations
//!
//! `Repository` owns the pool and hands out one thin repository per entity.
//! All of them are cheap clones over the same `SqlitePool`.

use super::{BudgetRepository, RecordRepository, ReminderRepository, UserRepository};
use sqlx::SqlitePool;

/// Entry point to the per-entity repositories
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }

    pub fn records(&self) -> RecordRepository {
        RecordRepository::new(self.pool.clone())
    }

    pub fn budgets(&self) -> BudgetRepository {
        BudgetRepository::new(self.pool.clone())
    }

    pub fn reminders(&self) -> ReminderRepository {
        ReminderRepository::new(self.pool.clone())
    }
}
