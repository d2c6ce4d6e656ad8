//! Statistics service
//!
//! Monthly aggregation over records already loaded into memory. Callers are
//! responsible for the period filter.

use crate::config::MONEY_PRECISION;
use crate::database::{Record, RecordType};
use serde::Serialize;

/// Income/expense totals for one period
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

/// Summed expense of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Round to `places` decimals on the exact binary value, ties to even
pub fn round_to(value: f64, places: u32) -> f64 {
    format!("{:.*}", places as usize, value)
        .parse()
        .unwrap_or(value)
}

pub fn monthly_summary(records: &[Record]) -> MonthlySummary {
    let (income, expense) = records.iter().fold((0.0_f64, 0.0_f64), |(income, expense), r| match r.rtype {
        RecordType::Income => (income + r.amount, expense),
        RecordType::Expense => (income, expense + r.amount),
    });

    MonthlySummary {
        income: round_to(income, MONEY_PRECISION),
        expense: round_to(expense, MONEY_PRECISION),
        balance: round_to(income - expense, MONEY_PRECISION),
    }
}

/// Expense per category in first-seen order. Income is ignored.
pub fn by_category(records: &[Record]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for record in records.iter().filter(|r| r.rtype == RecordType::Expense) {
        match totals.iter_mut().find(|t| t.category == record.category) {
            Some(total) => total.amount += record.amount,
            None => totals.push(CategoryTotal {
                category: record.category.clone(),
                amount: record.amount,
            }),
        }
    }

    for total in &mut totals {
        total.amount = round_to(total.amount, MONEY_PRECISION);
    }

    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(rtype: RecordType, category: &str, amount: f64, day: u32) -> Record {
        Record {
            id: 0,
            user_id: 1,
            rtype,
            category: category.to_string(),
            amount,
            occurred_on: NaiveDate::from_ymd_opt(2025, 1, day).unwrap(),
            note: String::new(),
        }
    }

    #[test]
    fn test_monthly_summary() {
        let records = vec![
            record(RecordType::Income, "salary", 1000.0, 1),
            record(RecordType::Expense, "food", 200.0, 2),
        ];

        let summary = monthly_summary(&records);
        assert_eq!(summary.income, 1000.0);
        assert_eq!(summary.expense, 200.0);
        assert_eq!(summary.balance, 800.0);

        let by_cat = by_category(&records);
        assert_eq!(
            by_cat,
            vec![CategoryTotal {
                category: "food".to_string(),
                amount: 200.0
            }]
        );
    }

    #[test]
    fn test_empty_period() {
        let summary = monthly_summary(&[]);
        assert_eq!(
            summary,
            MonthlySummary {
                income: 0.0,
                expense: 0.0,
                balance: 0.0
            }
        );
        assert!(by_category(&[]).is_empty());
    }

    #[test]
    fn test_negative_balance_and_rounding() {
        let records = vec![
            record(RecordType::Income, "refund", 0.1, 1),
            record(RecordType::Income, "refund", 0.2, 2),
            record(RecordType::Expense, "rent", 10.0, 3),
        ];

        let summary = monthly_summary(&records);
        assert_eq!(summary.income, 0.3);
        assert_eq!(summary.expense, 10.0);
        assert_eq!(summary.balance, -9.7);
    }

    #[test]
    fn test_by_category_keeps_first_seen_order() {
        let records = vec![
            record(RecordType::Expense, "transport", 3.0, 1),
            record(RecordType::Expense, "food", 10.0, 2),
            record(RecordType::Income, "salary", 500.0, 3),
            record(RecordType::Expense, "transport", 4.5, 4),
            record(RecordType::Expense, "food", 0.25, 5),
        ];

        let by_cat = by_category(&records);
        let names: Vec<&str> = by_cat.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(names, vec!["transport", "food"]);
        assert_eq!(by_cat[0].amount, 7.5);
        assert_eq!(by_cat[1].amount, 10.25);
    }

    #[test]
    fn test_totals_are_consistent() {
        let amounts = [12.34, 0.01, 99.99, 1234.5, 7.77, 0.49, 3.33];
        let records: Vec<Record> = amounts
            .iter()
            .enumerate()
            .map(|(i, &amount)| {
                let rtype = if i % 3 == 0 {
                    RecordType::Income
                } else {
                    RecordType::Expense
                };
                let category = ["food", "rent", "fun"][i % 3];
                record(rtype, category, amount, (i + 1) as u32)
            })
            .collect();

        let summary = monthly_summary(&records);
        assert!((summary.income - summary.expense - summary.balance).abs() <= 0.01);

        let category_sum: f64 = by_category(&records).iter().map(|t| t.amount).sum();
        assert!((category_sum - summary.expense).abs() <= 0.01);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.005_000_1, 2), 1.01);
        assert_eq!(round_to(0.567_89, 4), 0.5679);
        assert_eq!(round_to(-2.5, 0), -2.0);
        assert_eq!(round_to(0.125, 2), 0.12);
        assert_eq!(round_to(1.0 / 32.0, 4), 0.0312);
        assert_eq!(round_to(2.675, 2), 2.67);
    }

    #[test]
    fn test_half_cent_expense_rounds_to_even() {
        let summary = monthly_summary(&[record(RecordType::Expense, "snack", 0.125, 1)]);
        assert_eq!(summary.expense, 0.12);
        assert_eq!(summary.balance, -0.12);
    }
}
