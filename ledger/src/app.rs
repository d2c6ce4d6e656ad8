//! Ledger context and initialization
//!
//! A `LedgerContext` is opened once per process from a connection string and
//! passed explicitly to every command. It holds the pool-backed repository and
//! builds the services on demand.

use crate::database::{create_pool, Repository};
use crate::error::Result;
use crate::services::{AuthService, BudgetService, RecordService, RemindersService};

/// Open store plus the connection string it was opened with
#[derive(Clone)]
pub struct LedgerContext {
    db_url: String,
    repo: Repository,
}

impl LedgerContext {
    /// Open (and migrate) the store behind `db_url`
    pub async fn open(db_url: &str) -> Result<Self> {
        let pool = create_pool(db_url).await?;
        tracing::debug!("Ledger context ready for {}", db_url);

        Ok(Self {
            db_url: db_url.to_string(),
            repo: Repository::new(pool),
        })
    }

    pub fn db_url(&self) -> &str {
        &self.db_url
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.repo.users())
    }

    pub fn records(&self) -> RecordService {
        RecordService::new(self.repo.records())
    }

    pub fn budgets(&self) -> BudgetService {
        BudgetService::new(self.repo.budgets())
    }

    pub fn reminders(&self) -> RemindersService {
        RemindersService::new(self.repo.reminders())
    }
}
