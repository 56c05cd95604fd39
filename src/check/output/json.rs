//! JSON output formatter.
//!
//! Emits the issue list as a pretty-printed array for tooling integration.
//! Suggestions are always included when present.

use std::io::Write;

use super::ReportFormatter;
use crate::check::checker::AuditReport;

/// Formats reports as JSON.
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write + ?Sized>(
        &self,
        report: &AuditReport,
        writer: &mut W,
    ) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, &report.issues)
            .map_err(std::io::Error::other)?;
        writeln!(writer)
    }
}
