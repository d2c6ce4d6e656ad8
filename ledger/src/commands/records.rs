//! Record commands: add, list, search, stats

use super::write_record_line;
use crate::app::LedgerContext;
use crate::cli::AddArgs;
use crate::database::{MonthPeriod, NewRecord, User};
use crate::error::Result;
use crate::services::{charts, statistics};
use std::io::Write;
use std::path::Path;

pub async fn add(ctx: &LedgerContext, user: &User, args: AddArgs, out: &mut dyn Write) -> Result<()> {
    let record = ctx
        .records()
        .create_record(NewRecord {
            user_id: user.id,
            rtype: args.rtype,
            category: args.category,
            amount: args.amount,
            occurred_on: args.date,
            note: args.note,
        })
        .await?;

    writeln!(
        out,
        "added record #{}: {} {} {:.2} on {}",
        record.id, record.rtype, record.category, record.amount, record.occurred_on
    )?;
    Ok(())
}

pub async fn list(ctx: &LedgerContext, user: &User, month: MonthPeriod, out: &mut dyn Write) -> Result<()> {
    let records = ctx.records().list_month(user.id, month).await?;

    if records.is_empty() {
        writeln!(out, "no records")?;
        return Ok(());
    }

    for record in &records {
        write_record_line(out, record)?;
    }
    Ok(())
}

pub async fn search(ctx: &LedgerContext, user: &User, keyword: &str, out: &mut dyn Write) -> Result<()> {
    let records = ctx.records().search(user.id, keyword).await?;

    if records.is_empty() {
        writeln!(out, "no records")?;
        return Ok(());
    }

    for record in &records {
        write_record_line(out, record)?;
    }
    Ok(())
}

/// Monthly summary; with `reports_dir` also saves a pie chart there
pub async fn stats(
    ctx: &LedgerContext,
    user: &User,
    month: MonthPeriod,
    reports_dir: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let records = ctx.records().list_month(user.id, month).await?;
    let summary = statistics::monthly_summary(&records);
    let by_category = statistics::by_category(&records);

    writeln!(out, "Summary for {} {}", user.name, month)?;
    writeln!(out, "  income : {:.2}", summary.income)?;
    writeln!(out, "  expense: {:.2}", summary.expense)?;
    writeln!(out, "  balance: {:.2}", summary.balance)?;

    if !by_category.is_empty() {
        writeln!(out, "  expense by category:")?;
        for total in &by_category {
            writeln!(out, "    {}: {:.2}", total.category, total.amount)?;
        }
    }

    if let Some(dir) = reports_dir {
        if by_category.is_empty() {
            writeln!(out, "no expenses to plot")?;
        } else {
            let path = dir.join(format!("expenses_by_category_{}.svg", month));
            let title = format!("Expenses by Category {}", month);
            charts::render_category_pie(&path, &title, &by_category)?;
            writeln!(out, "saved plot: {}", path.display())?;
        }
    }

    Ok(())
}
