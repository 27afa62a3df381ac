use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::models::{Expense, DATE_FORMAT};

pub(crate) const CSV_HEADER: [&str; 4] = ["Name", "Amount", "Category", "Date"];

/// Write a header row then one row per expense, in the given order.
pub(crate) fn write_csv<W: Write>(writer: W, expenses: &[Expense]) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)
        .context("Failed to write CSV header")?;
    for e in expenses {
        let amount = e.amount.to_string();
        let date = e.date.format(DATE_FORMAT).to_string();
        wtr.write_record([
            e.name.as_str(),
            amount.as_str(),
            e.category.as_str(),
            date.as_str(),
        ])
        .context("Failed to write CSV record")?;
    }
    wtr.flush().context("Failed to flush CSV output")?;
    Ok(expenses.len())
}

pub(crate) fn export_to_file(path: &Path, expenses: &[Expense]) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    let count = write_csv(file, expenses)?;
    tracing::info!(path = %path.display(), count, "exported expenses");
    Ok(count)
}

pub(crate) fn default_export_path(dir: &Path, today: NaiveDate) -> PathBuf {
    dir.join(format!("spendtui-export-{}.csv", today.format(DATE_FORMAT)))
}
