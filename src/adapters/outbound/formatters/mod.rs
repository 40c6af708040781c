/// Formatter adapters for the comparison output formats
mod csv_formatter;
mod markdown_formatter;
mod table_formatter;

pub use csv_formatter::CsvFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use table_formatter::TableFormatter;
