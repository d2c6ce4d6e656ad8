//! CSV import/export commands

use crate::app::LedgerContext;
use crate::database::{MonthPeriod, User};
use crate::error::{AppError, Result};
use crate::services::csv_io::{load_records_from_csv, save_records_to_csv};
use crate::services::records::validate_record;
use std::io::Write;
use std::path::Path;

/// Import every row as a record of `user`. All rows are validated before
/// the first insert, so a bad row leaves the store untouched.
pub async fn import_csv(ctx: &LedgerContext, user: &User, path: &Path, out: &mut dyn Write) -> Result<()> {
    let rows = load_records_from_csv(path)?;

    let requests = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let req = row.into_new_record(user.id);
            validate_record(&req).map_err(|e| match e {
                AppError::Validation(msg) => AppError::Validation(format!("row {}: {}", i + 1, msg)),
                other => other,
            })?;
            Ok(req)
        })
        .collect::<Result<Vec<_>>>()?;

    let service = ctx.records();
    for req in &requests {
        service.create_record(req.clone()).await?;
    }

    tracing::info!("Imported {} records from {:?}", requests.len(), path);
    writeln!(out, "imported {} records for user {}", requests.len(), user.name)?;
    Ok(())
}

/// Export the user's records, or one month of them
pub async fn export_csv(
    ctx: &LedgerContext,
    user: &User,
    path: &Path,
    month: Option<MonthPeriod>,
    out: &mut dyn Write,
) -> Result<()> {
    let service = ctx.records();
    let records = match month {
        Some(month) => service.list_month(user.id, month).await?,
        None => service.list_all(user.id).await?,
    };

    save_records_to_csv(path, &records)?;

    writeln!(out, "exported {} records to {}", records.len(), path.display())?;
    Ok(())
}
