//! Visual theme and styling.

use console::Style;

use crate::check::Severity;

/// Terminal styles for reports.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for critical issues (red bold).
    pub critical: Style,
    /// Style for warnings (orange).
    pub warning: Style,
    /// Style for informational issues (magenta).
    pub info: Style,
    /// Style for the all-clear summary (green).
    pub success: Style,
    /// Style for `file:line` locations (bold).
    pub location: Style,
    /// Style for category tags (dim).
    pub dim: Style,
    /// Style for suggestion hints (magenta dim).
    pub hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            critical: Style::new().red().bold(),
            warning: Style::new().color256(208),
            info: Style::new().magenta(),
            success: Style::new().green(),
            location: Style::new().bold(),
            dim: Style::new().dim(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            critical: Style::new(),
            warning: Style::new(),
            info: Style::new(),
            success: Style::new(),
            location: Style::new(),
            dim: Style::new(),
            hint: Style::new(),
        }
    }

    /// Pick the theme matching the current terminal.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Header style for a severity group.
    pub fn severity(&self, severity: Severity) -> &Style {
        match severity {
            Severity::Critical => &self.critical,
            Severity::Warning => &self.warning,
            Severity::Info => &self.info,
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_has_no_escapes() {
        let theme = Theme::plain();
        let text = format!("{}", theme.critical.apply_to("## CRITICAL (1)"));
        assert_eq!(text, "## CRITICAL (1)");
    }

    #[test]
    fn colored_theme_styles_critical() {
        let theme = Theme::new();
        let text = format!("{}", theme.critical.clone().force_styling(true).apply_to("x"));
        assert!(text.contains("\x1b["));
    }

    #[test]
    fn severity_maps_to_style() {
        let theme = Theme::new();
        let styled = |s: Severity| {
            format!("{}", theme.severity(s).clone().force_styling(true).apply_to("x"))
        };
        assert_ne!(styled(Severity::Critical), styled(Severity::Warning));
        assert_ne!(styled(Severity::Warning), styled(Severity::Info));
    }
}
