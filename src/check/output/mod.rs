//! Report formatters.
//!
//! Both formatters write the complete report for one run to a writer;
//! callers choose the formatter from the `--json` flag.

pub mod human;
pub mod json;

use std::io::Write;

use super::checker::AuditReport;

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Trait for formatting a finished audit.
pub trait ReportFormatter {
    /// Write `report` to the given writer.
    fn format<W: Write + ?Sized>(&self, report: &AuditReport, writer: &mut W)
        -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
