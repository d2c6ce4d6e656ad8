//! Services module
//!
//! Business logic that sits between commands and the repositories. The
//! aggregation functions are pure and work on records already in memory.

pub mod auth;
pub mod budgets;
pub mod charts;
pub mod csv_io;
pub mod records;
pub mod reminders;
pub mod statistics;

pub use auth::AuthService;
pub use budgets::{BudgetProgress, BudgetService};
pub use records::RecordService;
pub use reminders::RemindersService;
pub use statistics::{CategoryTotal, MonthlySummary};
