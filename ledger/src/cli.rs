//! Command line definitions

use crate::config::{DEFAULT_DB_URL, DEFAULT_REMINDER_MESSAGE, DEFAULT_REPORTS_DIR};
use crate::database::{parse_time_of_day, MonthPeriod, RecordType};
use chrono::{NaiveDate, NaiveTime};
use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "ledger")]
#[command(about = "Personal finance ledger (with login)", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Backing store: `sqlite://file.db`, `sqlite::memory:` or a file path
    #[arg(long, global = true, env = "LEDGER_DB", default_value = DEFAULT_DB_URL)]
    pub db: String,

    /// Where the login session is kept (defaults to ~/.ledger_session.json)
    #[arg(long, global = true, env = "LEDGER_SESSION_FILE")]
    pub session_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create tables if they do not exist
    InitDb,

    /// Register a new user
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        email: Option<String>,
    },

    /// Log in and store the session
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Clear the local session
    Logout,

    /// Show the current session
    Whoami,

    /// Change the password of the logged-in user
    ChangePassword {
        #[arg(long)]
        old: String,
        #[arg(long)]
        new: String,
    },

    /// Add an income or expense record
    Add(AddArgs),

    /// List records of a month
    List {
        /// YYYY-MM
        #[arg(long)]
        month: MonthPeriod,
    },

    /// Find records whose category or note contains a keyword
    Search {
        #[arg(long)]
        keyword: String,
    },

    /// Monthly summary, optionally with a pie chart
    Stats {
        /// YYYY-MM
        #[arg(long)]
        month: MonthPeriod,
        /// Save an expenses-by-category pie chart
        #[arg(long)]
        plot: bool,
        /// Output folder for charts
        #[arg(long, default_value = DEFAULT_REPORTS_DIR)]
        reports_dir: PathBuf,
    },

    /// Manage budgets
    #[command(subcommand)]
    Budget(BudgetCommand),

    /// Manage reminders
    #[command(subcommand)]
    Reminder(ReminderCommand),

    /// Import records from CSV
    ImportCsv {
        #[arg(long)]
        path: PathBuf,
    },

    /// Export records to CSV
    ExportCsv {
        #[arg(long)]
        path: PathBuf,
        /// YYYY-MM; all records when omitted
        #[arg(long)]
        month: Option<MonthPeriod>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// INCOME or EXPENSE
    #[arg(long = "type")]
    pub rtype: RecordType,
    #[arg(long)]
    pub category: String,
    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,
    /// YYYY-MM-DD
    #[arg(long)]
    pub date: NaiveDate,
    #[arg(long, default_value = "")]
    pub note: String,
}

#[derive(Debug, Clone, Subcommand)]
pub enum BudgetCommand {
    /// Set or update a category budget
    Set {
        #[arg(long)]
        category: String,
        #[arg(long, allow_negative_numbers = true)]
        limit: f64,
    },
    /// List budgets
    List,
    /// Show budget consumption for a month
    Progress {
        /// YYYY-MM
        #[arg(long)]
        month: MonthPeriod,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum ReminderCommand {
    /// Add a reminder
    #[command(group(ArgGroup::new("state").args(["enabled", "disable"])))]
    Set {
        /// HH:MM or HH:MM:SS (24h)
        #[arg(long, value_parser = parse_time_of_day)]
        time: NaiveTime,
        #[arg(long, default_value = DEFAULT_REMINDER_MESSAGE)]
        message: String,
        /// Enable the reminder (default)
        #[arg(long)]
        enabled: bool,
        /// Store the reminder switched off
        #[arg(long)]
        disable: bool,
    },
    /// List reminders
    List,
    /// Print enabled reminders
    Emit,
}
