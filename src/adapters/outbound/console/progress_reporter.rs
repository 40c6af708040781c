use crate::ports::outbound::ProgressReporter;
use owo_colors::OwoColorize;
use std::io::IsTerminal;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so stdout carries only the rendered comparison. Errors
/// and completions are colored when stderr is a terminal and `NO_COLOR` is
/// unset.
pub struct StderrProgressReporter {
    use_color: bool,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self::with_color(
            std::io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
        )
    }

    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    fn render_error(&self, message: &str) -> String {
        if self.use_color {
            message.yellow().to_string()
        } else {
            message.to_string()
        }
    }

    fn render_completion(&self, message: &str) -> String {
        if self.use_color {
            message.green().bold().to_string()
        } else {
            message.to_string()
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", self.render_error(message));
    }

    fn report_completion(&self, message: &str) {
        eprintln!("{}", self.render_completion(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_creation() {
        let reporter = StderrProgressReporter::new();
        reporter.report("Test message");
        reporter.report_error("Test error");
        reporter.report_completion("Test completion");
    }

    #[test]
    fn test_plain_rendering_has_no_escape_codes() {
        let reporter = StderrProgressReporter::with_color(false);
        assert_eq!(reporter.render_error("warn"), "warn");
        assert_eq!(reporter.render_completion("done"), "done");
    }

    #[test]
    fn test_colored_rendering_wraps_message() {
        let reporter = StderrProgressReporter::with_color(true);
        let rendered = reporter.render_error("warn");
        assert!(rendered.contains("warn"));
        assert!(rendered.contains('\u{1b}'));
    }
}
