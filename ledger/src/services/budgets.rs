//! Budget service
//!
//! Spent-to-limit ratios per budget category and the alert view built on
//! top of them.

use crate::config::{MONEY_PRECISION, RATIO_PRECISION};
use crate::database::{Budget, BudgetRepository, Record, RecordType};
use crate::error::{AppError, Result};
use crate::services::statistics::round_to;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Consumption of one budget over a period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub category: String,
    pub monthly_limit: f64,
    pub spent: f64,
    /// `spent / monthly_limit`, 0.0 when the limit is not positive
    pub ratio: f64,
}

impl BudgetProgress {
    pub fn is_alert(&self, warn_ratio: f64) -> bool {
        self.ratio >= warn_ratio
    }
}

/// Ratio per budget category, in budget order.
///
/// Only EXPENSE records count, and only in categories that have a budget.
pub fn progress(budgets: &[Budget], records: &[Record]) -> Vec<BudgetProgress> {
    let mut spent: HashMap<&str, f64> = budgets
        .iter()
        .map(|b| (b.category.as_str(), 0.0))
        .collect();

    for record in records.iter().filter(|r| r.rtype == RecordType::Expense) {
        if let Some(total) = spent.get_mut(record.category.as_str()) {
            *total += record.amount;
        }
    }

    budgets
        .iter()
        .map(|b| {
            let spent = spent.get(b.category.as_str()).copied().unwrap_or(0.0);
            let ratio = if b.monthly_limit <= 0.0 {
                0.0
            } else {
                round_to(spent / b.monthly_limit, RATIO_PRECISION)
            };

            BudgetProgress {
                category: b.category.clone(),
                monthly_limit: b.monthly_limit,
                spent: round_to(spent, MONEY_PRECISION),
                ratio,
            }
        })
        .collect()
}

/// Category -> whether its ratio reached `warn_ratio`
pub fn alert_flags(budgets: &[Budget], records: &[Record], warn_ratio: f64) -> BTreeMap<String, bool> {
    progress(budgets, records)
        .into_iter()
        .map(|p| {
            let alert = p.is_alert(warn_ratio);
            (p.category, alert)
        })
        .collect()
}

/// Service for managing budgets
#[derive(Clone)]
pub struct BudgetService {
    repo: BudgetRepository,
}

impl BudgetService {
    pub fn new(repo: BudgetRepository) -> Self {
        Self { repo }
    }

    /// Set or replace the monthly limit of a category
    pub async fn set_budget(&self, user_id: i64, category: &str, monthly_limit: f64) -> Result<Budget> {
        let category = category.trim();
        if category.is_empty() {
            return Err(AppError::Validation("category required".to_string()));
        }
        if !monthly_limit.is_finite() || monthly_limit < 0.0 {
            return Err(AppError::Validation(
                "budget limit must be zero or positive".to_string(),
            ));
        }

        tracing::info!("Setting budget {} = {:.2} for user {}", category, monthly_limit, user_id);
        self.repo.set(user_id, category, monthly_limit).await
    }

    pub async fn list_budgets(&self, user_id: i64) -> Result<Vec<Budget>> {
        self.repo.list_by_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::repository::test_support::{create_test_repo, create_test_user};
    use chrono::NaiveDate;

    fn budget(category: &str, monthly_limit: f64) -> Budget {
        Budget {
            id: 0,
            user_id: 1,
            category: category.to_string(),
            monthly_limit,
        }
    }

    fn expense(category: &str, amount: f64) -> Record {
        Record {
            id: 0,
            user_id: 1,
            rtype: RecordType::Expense,
            category: category.to_string(),
            amount,
            occurred_on: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            note: String::new(),
        }
    }

    #[test]
    fn test_progress_and_alerts() {
        let budgets = vec![budget("food", 300.0), budget("rent", 1500.0)];
        let mut records = vec![
            expense("food", 120.0),
            expense("food", 80.0),
            expense("rent", 1200.0),
            expense("fun", 999.0),
        ];
        records.push(Record {
            rtype: RecordType::Income,
            ..expense("food", 5000.0)
        });

        let prog = progress(&budgets, &records);
        assert_eq!(prog.len(), 2);
        assert_eq!(prog[0].category, "food");
        assert_eq!(prog[0].spent, 200.0);
        assert_eq!(prog[0].ratio, 0.6667);
        assert_eq!(prog[1].ratio, 0.8);

        let alerts = alert_flags(&budgets, &records, 0.8);
        assert_eq!(alerts["food"], false);
        assert_eq!(alerts["rent"], true);
        assert!(!alerts.contains_key("fun"));

        let lowered = vec![budget("food", 200.0), budget("rent", 1500.0)];
        let alerts = alert_flags(&lowered, &records, 0.8);
        assert_eq!(alerts["food"], true);
    }

    #[test]
    fn test_warning_threshold_walkthrough() {
        let budgets = vec![budget("food", 100.0)];
        let mut records = vec![expense("food", 30.0), expense("food", 20.0)];

        let prog = progress(&budgets, &records);
        assert_eq!(prog[0].ratio, 0.5);
        assert!(!prog[0].is_alert(0.8));

        records.push(expense("food", 25.0));
        let prog = progress(&budgets, &records);
        assert_eq!(prog[0].ratio, 0.75);
        assert!(!prog[0].is_alert(0.8));

        records.push(expense("food", 5.0));
        let prog = progress(&budgets, &records);
        assert_eq!(prog[0].ratio, 0.8);
        assert!(prog[0].is_alert(0.8));

        records.push(expense("food", 10.0));
        assert!(progress(&budgets, &records)[0].is_alert(0.8));
    }

    #[test]
    fn test_zero_limit_ratio_is_zero() {
        let budgets = vec![budget("gifts", 0.0)];
        let records = vec![expense("gifts", 50.0)];

        let prog = progress(&budgets, &records);
        assert_eq!(prog[0].ratio, 0.0);
        assert_eq!(prog[0].spent, 50.0);
        assert!(!prog[0].is_alert(0.8));
    }

    #[test]
    fn test_no_budgets() {
        assert!(progress(&[], &[expense("food", 1.0)]).is_empty());
    }

    #[tokio::test]
    async fn test_set_budget_validation() {
        let repo = create_test_repo().await;
        let user = create_test_user(&repo, "bob").await;
        let service = BudgetService::new(repo.budgets());

        assert!(matches!(
            service.set_budget(user.id, "food", -1.0).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            service.set_budget(user.id, "  ", 10.0).await,
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            service.set_budget(user.id, "food", f64::NAN).await,
            Err(AppError::Validation(_))
        ));

        service.set_budget(user.id, "food", 100.0).await.unwrap();
        service.set_budget(user.id, "food", 120.0).await.unwrap();

        let budgets = service.list_budgets(user.id).await.unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].monthly_limit, 120.0);
    }
}
