//! Check command implementation.
//!
//! Audits a file or directory tree and writes the report. The exit code is
//! 0 when nothing was found and 1 when any issue was reported.

use std::io::Write;

use tracing::debug;

use crate::check::output::OutputFormat;
use crate::check::{Audit, AuditTarget, HumanFormatter, JsonFormatter, ReportFormatter};
use crate::cli::args::CheckArgs;
use crate::config::load_settings;
use crate::error::Result;
use crate::ui::Theme;

use super::command::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
    theme: Theme,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs, theme: Theme) -> Self {
        Self { args, theme }
    }

    fn output_format(&self) -> OutputFormat {
        if self.args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<CommandResult> {
        let target = AuditTarget::resolve(&self.args.path)?;
        let settings = load_settings(&target.root, self.args.config.as_deref())?;
        debug!("Auditing {} with {:?}", target.root.display(), settings);

        let report = Audit::new(settings).run(&target)?;

        match self.output_format() {
            OutputFormat::Json => JsonFormatter::new().format(&report, out)?,
            OutputFormat::Human => {
                HumanFormatter::new(self.args.fix, self.theme.clone()).format(&report, out)?
            }
        }

        if report.is_clean() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
