use crate::application::read_models::{
    ComparisonReadModel, MethodologyView, RowView, NO_MATCHES_MESSAGE,
};
use crate::comparison::domain::Field;
use crate::ports::outbound::ComparisonFormatter;
use crate::shared::Result;

/// Marker for rows and cells carrying a custom benchmark
const CUSTOM_MARKER: &str = "★";

/// MarkdownFormatter adapter for a shareable comparison document
///
/// Renders display strings (not raw values), followed by appliance notes,
/// vendor test methodology and the cross-vendor caveat.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &ComparisonReadModel<'_>) {
        output.push_str("# Firewall Appliance Comparison\n\n");
        output.push_str(&format!(
            "Showing {} of {} appliances.\n\n",
            model.visible_count, model.total_count
        ));
    }

    fn render_table(&self, output: &mut String, model: &ComparisonReadModel<'_>) {
        if model.is_empty() {
            output.push_str(&format!("_{}_\n\n", NO_MATCHES_MESSAGE));
            return;
        }

        let labels: Vec<&str> = model.fields.iter().map(|f| f.label()).collect();
        output.push_str(&format!("| | {} |\n", labels.join(" | ")));
        output.push_str(&format!("|---|{}\n", "---|".repeat(labels.len())));

        for row in &model.rows {
            self.render_row(output, row);
        }
        output.push('\n');

        if model.rows.iter().any(|row| row.has_custom) {
            output.push_str(&format!(
                "{} Custom benchmark values are marked with {}.\n\n",
                CUSTOM_MARKER, CUSTOM_MARKER
            ));
        }
    }

    fn render_row(&self, output: &mut String, row: &RowView) {
        let marker = if row.has_custom { CUSTOM_MARKER } else { "" };
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| {
                let text = Self::escape_markdown_table_cell(&cell.text);
                if cell.customized {
                    format!("**{}** {}", text, CUSTOM_MARKER)
                } else {
                    text
                }
            })
            .collect();
        output.push_str(&format!("| {} | {} |\n", marker, cells.join(" | ")));
    }

    fn render_notes(&self, output: &mut String, rows: &[RowView]) {
        let noted: Vec<&RowView> = rows
            .iter()
            .filter(|row| !row.detail.notes.is_empty() || !row.detail.datasheet.is_empty())
            .collect();
        if noted.is_empty() {
            return;
        }

        output.push_str("## Appliance Notes\n\n");
        for row in noted {
            let model = row
                .cells
                .iter()
                .find(|cell| cell.field == Field::Model)
                .map(|cell| cell.text.as_str())
                .unwrap_or(&row.id);

            let mut line = format!("- **{} {}**", row.vendor_name, model);
            if let Some(gen) = &row.detail.gen {
                line.push_str(&format!(" ({})", gen));
            }
            if !row.detail.notes.is_empty() {
                line.push_str(&format!(": {}", row.detail.notes.replace('\n', " ")));
            }
            if !row.detail.datasheet.is_empty() {
                line.push_str(&format!(" [Datasheet]({})", row.detail.datasheet));
            }
            output.push_str(&line);
            output.push('\n');
        }
        output.push('\n');
    }

    fn render_methodology(&self, output: &mut String, methodology: &[MethodologyView]) {
        if methodology.is_empty() {
            return;
        }

        output.push_str("## Vendor Test Methodology\n\n");
        for note in methodology {
            output.push_str(&format!("### {}\n\n", note.title));
            for line in note.text.lines().filter(|l| !l.trim().is_empty()) {
                output.push_str(&format!("- {}\n", line.trim()));
            }
            output.push('\n');
        }
    }

    fn render_caveat(&self, output: &mut String, caveat: Option<&str>) {
        if let Some(caveat) = caveat {
            output.push_str(&format!("> ⚠️ {}\n", caveat.replace('\n', " ")));
        }
    }
}

impl ComparisonFormatter for MarkdownFormatter {
    fn format(&self, model: &ComparisonReadModel<'_>) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_table(&mut output, model);
        self.render_notes(&mut output, &model.rows);
        self.render_methodology(&mut output, &model.methodology);
        self.render_caveat(&mut output, model.caveat.as_deref());

        Ok(output.trim_end().to_string() + "\n")
    }
}
