//! Records service
//!
//! Validation in front of the record repository plus the month filter used by
//! `list`, `stats` and `budget progress`.

use crate::database::{MonthPeriod, NewRecord, Record, RecordRepository};
use crate::error::{AppError, Result};

/// Reject non-positive (or non-finite) amounts and empty categories
pub fn validate_record(req: &NewRecord) -> Result<()> {
    if !req.amount.is_finite() || req.amount <= 0.0 {
        return Err(AppError::Validation("amount must be positive".to_string()));
    }
    if req.category.trim().is_empty() {
        return Err(AppError::Validation("category required".to_string()));
    }
    Ok(())
}

/// Service for managing records
#[derive(Clone)]
pub struct RecordService {
    repo: RecordRepository,
}

impl RecordService {
    pub fn new(repo: RecordRepository) -> Self {
        Self { repo }
    }

    /// Validate and persist a record
    pub async fn create_record(&self, mut req: NewRecord) -> Result<Record> {
        validate_record(&req)?;
        req.category = req.category.trim().to_string();

        let record = self.repo.add(&req).await?;

        tracing::info!(
            "Record created: #{} {} {} {:.2}",
            record.id,
            record.rtype,
            record.category,
            record.amount
        );

        Ok(record)
    }

    /// Records of one calendar month, oldest first
    pub async fn list_month(&self, user_id: i64, month: MonthPeriod) -> Result<Vec<Record>> {
        self.repo.list_by_period(user_id, month.start(), month.end()).await
    }

    pub async fn list_all(&self, user_id: i64) -> Result<Vec<Record>> {
        self.repo.list_by_user(user_id).await
    }

    /// Records whose category or note contains `keyword`
    pub async fn search(&self, user_id: i64, keyword: &str) -> Result<Vec<Record>> {
        self.repo.search(user_id, keyword).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::repository::test_support::{create_test_repo, create_test_user};
    use crate::database::RecordType;
    use chrono::NaiveDate;

    fn req(user_id: i64, rtype: RecordType, category: &str, amount: f64, date: &str) -> NewRecord {
        NewRecord {
            user_id,
            rtype,
            category: category.to_string(),
            amount,
            occurred_on: date.parse::<NaiveDate>().unwrap(),
            note: String::new(),
        }
    }

    #[test]
    fn test_validate_record() {
        assert!(validate_record(&req(1, RecordType::Expense, "food", 1.0, "2025-01-01")).is_ok());

        for bad_amount in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = validate_record(&req(1, RecordType::Expense, "food", bad_amount, "2025-01-01"))
                .unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }

        let err = validate_record(&req(1, RecordType::Income, "", 1.0, "2025-01-01")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        let err = validate_record(&req(1, RecordType::Income, "   ", 1.0, "2025-01-01")).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_record_assigns_id() {
        let repo = create_test_repo().await;
        let user = create_test_user(&repo, "alice").await;
        let service = RecordService::new(repo.records());

        let record = service
            .create_record(req(user.id, RecordType::Expense, " food ", 12.5, "2025-01-02"))
            .await
            .unwrap();

        assert!(record.id > 0);
        assert_eq!(record.category, "food");
    }

    #[tokio::test]
    async fn test_invalid_record_is_not_persisted() {
        let repo = create_test_repo().await;
        let user = create_test_user(&repo, "alice").await;
        let service = RecordService::new(repo.records());

        let result = service
            .create_record(req(user.id, RecordType::Expense, "food", -1.0, "2025-01-02"))
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        assert!(service.list_all(user.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_month_handles_year_rollover() {
        let repo = create_test_repo().await;
        let user = create_test_user(&repo, "alice").await;
        let service = RecordService::new(repo.records());

        for date in ["2024-11-30", "2024-12-01", "2024-12-31", "2025-01-01"] {
            service
                .create_record(req(user.id, RecordType::Expense, "food", 1.0, date))
                .await
                .unwrap();
        }

        let december = service
            .list_month(user.id, "2024-12".parse().unwrap())
            .await
            .unwrap();
        let dates: Vec<String> = december.iter().map(|r| r.occurred_on.to_string()).collect();
        assert_eq!(dates, vec!["2024-12-01", "2024-12-31"]);
    }
}
