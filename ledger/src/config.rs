//! Application configuration constants
//!
//! Central location for defaults, thresholds and validation boundaries
//! used throughout the ledger.

// ===== Storage =====

/// Connection string used when `--db` is not given
pub const DEFAULT_DB_URL: &str = "sqlite://ledger.db";

/// File name of the login session, placed in the user's home directory
pub const SESSION_FILE_NAME: &str = ".ledger_session.json";

// ===== Budgets =====

/// Spent-to-limit ratio at which a budget is flagged in `budget progress`
pub const BUDGET_WARN_RATIO: f64 = 0.8;

/// Decimal places kept for budget ratios
pub const RATIO_PRECISION: u32 = 4;

/// Decimal places kept for money totals
pub const MONEY_PRECISION: u32 = 2;

// ===== Reminders =====

/// Display format of a reminder's time of day
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Message stored when `reminder set` is called without `--message`
pub const DEFAULT_REMINDER_MESSAGE: &str = "Bookkeeping reminder";

// ===== Authentication =====

/// Random salt size in bytes (hex-encoded to twice this length)
pub const SALT_SIZE: usize = 16;

/// Separator between salt and digest in a stored password hash
pub const HASH_SEPARATOR: char = '$';

// ===== Reports =====

/// Default output folder for `stats --plot`
pub const DEFAULT_REPORTS_DIR: &str = "reports";

/// Pie chart canvas size in pixels
pub const CHART_SIZE: (u32, u32) = (640, 480);

/// Column order of exported CSV files
pub const CSV_HEADER: [&str; 7] = [
    "record_id",
    "user_id",
    "rtype",
    "category",
    "amount",
    "occurred_on",
    "note",
];
