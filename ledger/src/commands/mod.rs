//! Command handlers
//!
//! Each handler checks the session where needed, calls into the services and
//! writes its console output to `out`. `run` dispatches a parsed `Cli`.

pub mod auth;
pub mod budgets;
pub mod records;
pub mod reminders;
pub mod transfer;

use crate::app::LedgerContext;
use crate::cli::{BudgetCommand, Cli, Command, ReminderCommand};
use crate::database::{Record, User};
use crate::error::{AppError, Result};
use crate::storage::SessionStore;
use std::io::Write;

/// Execute one CLI invocation
pub async fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let sessions = SessionStore::new(
        cli.session_file
            .clone()
            .unwrap_or_else(SessionStore::default_path),
    );
    let db = cli.db.as_str();

    tracing::debug!("Using database {} and session file {:?}", db, sessions.path());

    match cli.command {
        Command::InitDb => auth::init_db(db, out).await,
        Command::Register {
            username,
            password,
            email,
        } => auth::register(db, &username, &password, email.as_deref(), out).await,
        Command::Login { username, password } => {
            auth::login(db, &sessions, &username, &password, out).await
        }
        Command::Logout => auth::logout(&sessions, out).await,
        Command::Whoami => auth::whoami(&sessions, out).await,
        Command::ChangePassword { old, new } => {
            auth::change_password(db, &sessions, &old, &new, out).await
        }
        command => {
            let (ctx, user) = open_for_user(db, &sessions).await?;
            dispatch_user_command(&ctx, &user, command, out).await
        }
    }
}

async fn dispatch_user_command(
    ctx: &LedgerContext,
    user: &User,
    command: Command,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Add(args) => records::add(ctx, user, args, out).await,
        Command::List { month } => records::list(ctx, user, month, out).await,
        Command::Search { keyword } => records::search(ctx, user, &keyword, out).await,
        Command::Stats {
            month,
            plot,
            reports_dir,
        } => records::stats(ctx, user, month, plot.then_some(reports_dir.as_path()), out).await,
        Command::Budget(BudgetCommand::Set { category, limit }) => {
            budgets::set(ctx, user, &category, limit, out).await
        }
        Command::Budget(BudgetCommand::List) => budgets::list(ctx, user, out).await,
        Command::Budget(BudgetCommand::Progress { month }) => {
            budgets::progress(ctx, user, month, out).await
        }
        Command::Reminder(ReminderCommand::Set {
            time,
            message,
            disable,
            ..
        }) => reminders::set(ctx, user, time, &message, !disable, out).await,
        Command::Reminder(ReminderCommand::List) => reminders::list(ctx, user, out).await,
        Command::Reminder(ReminderCommand::Emit) => reminders::emit(ctx, user, out).await,
        Command::ImportCsv { path } => transfer::import_csv(ctx, user, &path, out).await,
        Command::ExportCsv { path, month } => {
            transfer::export_csv(ctx, user, &path, month, out).await
        }
        other => Err(AppError::Generic(format!(
            "command does not need a login: {:?}",
            other
        ))),
    }
}

/// Session gate for record/budget/reminder/CSV commands
async fn open_for_user(db: &str, sessions: &SessionStore) -> Result<(LedgerContext, User)> {
    let session = sessions.require(db).await?;
    let ctx = LedgerContext::open(db).await?;

    let user = ctx.auth().get_user(&session.user).await?.ok_or_else(|| {
        AppError::Session("current user not found. please register/login again.".to_string())
    })?;

    Ok((ctx, user))
}

/// `#id  date  TYPE  category  amount  note`
fn write_record_line(out: &mut dyn Write, record: &Record) -> Result<()> {
    writeln!(
        out,
        "#{}\t{}\t{}\t{}\t{:.2}\t{}",
        record.id, record.occurred_on, record.rtype, record.category, record.amount, record.note
    )?;
    Ok(())
}
