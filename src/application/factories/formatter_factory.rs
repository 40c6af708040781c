use crate::adapters::outbound::formatters::{CsvFormatter, MarkdownFormatter, TableFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ComparisonFormatter;

/// Factory for creating comparison formatters
///
/// Selects the formatter adapter for an output format. `use_color` only
/// affects the terminal table.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use fw_compare::application::dto::OutputFormat;
    /// use fw_compare::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Csv, false);
    /// ```
    pub fn create(format: OutputFormat, use_color: bool) -> Box<dyn ComparisonFormatter> {
        match format {
            OutputFormat::Table => Box::new(TableFormatter::with_color(use_color)),
            OutputFormat::Csv => Box::new(CsvFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use fw_compare::application::dto::OutputFormat;
    /// use fw_compare::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Markdown);
    /// assert_eq!(message, "📝 Rendering Markdown comparison...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Table => "📝 Rendering comparison table...",
            OutputFormat::Csv => "📝 Rendering CSV comparison...",
            OutputFormat::Markdown => "📝 Rendering Markdown comparison...",
        }
    }
}
