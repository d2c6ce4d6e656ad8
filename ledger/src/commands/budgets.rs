//! Budget commands

use crate::app::LedgerContext;
use crate::config::BUDGET_WARN_RATIO;
use crate::database::{MonthPeriod, User};
use crate::error::Result;
use crate::services::budgets::progress as budget_progress;
use std::io::Write;

pub async fn set(
    ctx: &LedgerContext,
    user: &User,
    category: &str,
    limit: f64,
    out: &mut dyn Write,
) -> Result<()> {
    let budget = ctx.budgets().set_budget(user.id, category, limit).await?;

    writeln!(
        out,
        "budget set: category={} limit={:.2}",
        budget.category, budget.monthly_limit
    )?;
    Ok(())
}

pub async fn list(ctx: &LedgerContext, user: &User, out: &mut dyn Write) -> Result<()> {
    let budgets = ctx.budgets().list_budgets(user.id).await?;

    if budgets.is_empty() {
        writeln!(out, "no budgets")?;
        return Ok(());
    }

    for budget in &budgets {
        writeln!(out, "{}\t{:.2}", budget.category, budget.monthly_limit)?;
    }
    Ok(())
}

/// Percent used per category, ` !!` once the warning ratio is reached
pub async fn progress(
    ctx: &LedgerContext,
    user: &User,
    month: MonthPeriod,
    out: &mut dyn Write,
) -> Result<()> {
    let budgets = ctx.budgets().list_budgets(user.id).await?;
    if budgets.is_empty() {
        writeln!(out, "no budgets")?;
        return Ok(());
    }

    let records = ctx.records().list_month(user.id, month).await?;
    let mut report = budget_progress(&budgets, &records);
    report.sort_by(|a, b| a.category.cmp(&b.category));

    writeln!(out, "Budget progress for {} {}", user.name, month)?;
    for entry in &report {
        let flag = if entry.is_alert(BUDGET_WARN_RATIO) { " !!" } else { "" };
        writeln!(out, "  {}: {:.1}%{}", entry.category, entry.ratio * 100.0, flag)?;
    }
    Ok(())
}
