//! Plain-text tax report export.

pub mod text;

pub use text::{export_tax_report, render_tax_report, report_filename, ReportError};
