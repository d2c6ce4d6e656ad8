//! Database models
//!
//! Rust structs representing ledger entities.
//! Row structs derive `FromRow`; `New*` structs are insert requests.

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// An application user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    /// `salt$sha256hex(salt + password)`
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Direction of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum RecordType {
    Income,
    Expense,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Income => "INCOME",
            RecordType::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INCOME" => Ok(RecordType::Income),
            "EXPENSE" => Ok(RecordType::Expense),
            other => Err(format!("record type must be INCOME or EXPENSE, got '{}'", other)),
        }
    }
}

/// A single income or expense transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Record {
    pub id: i64,
    pub user_id: i64,
    pub rtype: RecordType,
    pub category: String,
    pub amount: f64,
    pub occurred_on: NaiveDate,
    pub note: String,
}

/// Create record request
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewRecord {
    pub user_id: i64,
    pub rtype: RecordType,
    pub category: String,
    pub amount: f64,
    pub occurred_on: NaiveDate,
    #[serde(default)]
    pub note: String,
}

/// Per-category monthly spending limit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Budget {
    pub id: i64,
    pub user_id: i64,
    pub category: String,
    pub monthly_limit: f64,
}

/// Time-of-day notification that can be switched off
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Reminder {
    pub id: i64,
    pub user_id: i64,
    pub message: String,
    pub at: NaiveTime,
    pub enabled: bool,
}

/// Create reminder request
#[derive(Debug, Clone, Deserialize)]
pub struct NewReminder {
    pub user_id: i64,
    pub message: String,
    pub at: NaiveTime,
    pub enabled: bool,
}

/// A calendar month, parsed from `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthPeriod {
    first_day: NaiveDate,
}

impl MonthPeriod {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// First day of the month (inclusive bound)
    pub fn start(&self) -> NaiveDate {
        self.first_day
    }

    /// First day of the following month (exclusive bound)
    pub fn end(&self) -> NaiveDate {
        let (year, month) = if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(NaiveDate::MAX)
    }
}

impl fmt::Display for MonthPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year(), self.month())
    }
}

impl FromStr for MonthPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("month must be YYYY-MM, got '{}'", s);

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        MonthPeriod::new(year, month).ok_or_else(invalid)
    }
}

/// Parse a 24h time of day, `HH:MM` or `HH:MM:SS`
pub fn parse_time_of_day(s: &str) -> Result<NaiveTime, String> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| format!("time must be HH:MM or HH:MM:SS (24h), got '{}'", s))
}
