use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;

use flipstock_core::format_currency;
use flipstock_metrics::TaxReportData;

/// Report export error.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report file: {0}")]
    Io(#[from] std::io::Error),
}

/// Render the fixed plain-text tax report.
///
/// The header date is ISO `YYYY-MM-DD` so the output is locale-independent;
/// every amount goes through [`format_currency`].
pub fn render_tax_report(data: &TaxReportData, generated_at: DateTime<Utc>) -> String {
    format!(
        "TAX REPORT - {date}\n\
         ========================================\n\
         Gross Receipts: {gross}\n\
         Cost of Goods Sold: {cogs}\n\
         Platform Fees: {fees}\n\
         Shipping Costs: {shipping}\n\
         Total Expenses: {expenses}\n\
         Net Profit: {net}",
        date = generated_at.format("%Y-%m-%d"),
        gross = format_currency(data.gross_receipts),
        cogs = format_currency(data.cogs),
        fees = format_currency(data.platform_fees),
        shipping = format_currency(data.shipping_costs),
        expenses = format_currency(data.total_expenses),
        net = format_currency(data.net_profit),
    )
}

/// File name for a report generated at the given instant:
/// `tax-report-<epoch-millis>.txt`.
pub fn report_filename(generated_at: DateTime<Utc>) -> String {
    format!("tax-report-{}.txt", generated_at.timestamp_millis())
}

/// Write the rendered report into `dir` and return the file path.
pub fn export_tax_report(
    dir: &Path,
    data: &TaxReportData,
    generated_at: DateTime<Utc>,
) -> Result<PathBuf, ReportError> {
    let path = dir.join(report_filename(generated_at));
    std::fs::write(&path, render_tax_report(data, generated_at))?;
    tracing::info!(path = %path.display(), "exported tax report");
    Ok(path)
}
