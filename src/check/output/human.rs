//! Human-readable output formatter.
//!
//! Groups issues by severity, most severe first, and prints each as a
//! location line followed by its message.

use std::io::Write;

use super::ReportFormatter;
use crate::check::checker::AuditReport;
use crate::check::issue::{Issue, Severity};
use crate::ui::Theme;

/// Formats reports for terminal display.
pub struct HumanFormatter {
    /// Print `-> suggestion` lines under issues that carry one.
    pub show_suggestions: bool,
    theme: Theme,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(show_suggestions: bool, theme: Theme) -> Self {
        Self {
            show_suggestions,
            theme,
        }
    }

    fn write_issue<W: Write + ?Sized>(&self, issue: &Issue, writer: &mut W) -> std::io::Result<()> {
        writeln!(
            writer,
            "  {} {}",
            self.theme
                .location
                .apply_to(format!("{}:{}", issue.file, issue.line)),
            self.theme.dim.apply_to(format!("[{}]", issue.category))
        )?;
        writeln!(writer, "    {}", issue.message)?;

        if self.show_suggestions {
            if let Some(ref suggestion) = issue.suggestion {
                writeln!(writer, "    {}", self.theme.hint.apply_to(format!("-> {}", suggestion)))?;
            }
        }

        writeln!(writer)
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write + ?Sized>(
        &self,
        report: &AuditReport,
        writer: &mut W,
    ) -> std::io::Result<()> {
        if report.is_clean() {
            return writeln!(
                writer,
                "{}",
                self.theme.success.apply_to(format!(
                    "No issues found in {} files.",
                    report.files_scanned
                ))
            );
        }

        writeln!(
            writer,
            "Found {} issues in {} files",
            report.issues.len(),
            report.files_scanned
        )?;
        writeln!(writer)?;

        for severity in Severity::REPORT_ORDER {
            let group: Vec<&Issue> = report.with_severity(severity).collect();
            if group.is_empty() {
                continue;
            }

            let header = format!("## {} ({})", severity.label(), group.len());
            writeln!(writer, "{}", self.theme.severity(severity).apply_to(header))?;
            writeln!(writer)?;

            for issue in group {
                self.write_issue(issue, writer)?;
            }
        }

        Ok(())
    }
}
