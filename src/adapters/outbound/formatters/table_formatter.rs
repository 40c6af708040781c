use crate::application::read_models::{ComparisonReadModel, RowView, NO_MATCHES_MESSAGE};
use crate::comparison::domain::Field;
use crate::ports::outbound::ComparisonFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;

const COLUMN_GAP: &str = "  ";

/// TableFormatter adapter for an aligned terminal table
///
/// Metric columns are right-aligned. Rows with custom benchmarks carry a `★`
/// in the leading column and each overridden value is suffixed with `*`.
/// With color enabled, vendor names use the vendor color.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    pub fn new() -> Self {
        Self::with_color(false)
    }

    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    fn cell_text(text: &str, customized: bool) -> String {
        if customized {
            format!("{}*", text)
        } else {
            text.to_string()
        }
    }

    fn column_widths(model: &ComparisonReadModel<'_>) -> Vec<usize> {
        model
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                model
                    .rows
                    .iter()
                    .map(|row| {
                        let cell = &row.cells[i];
                        Self::cell_text(&cell.text, cell.customized).chars().count()
                    })
                    .chain(std::iter::once(field.label().chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn pad(text: &str, width: usize, field: Field) -> String {
        if field.metric().is_some() {
            format!("{:>width$}", text, width = width)
        } else {
            format!("{:<width$}", text, width = width)
        }
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl TableFormatter {
    fn render_header(&self, lines: &mut Vec<String>, model: &ComparisonReadModel<'_>, widths: &[usize]) {
        let header: Vec<String> = model
            .fields
            .iter()
            .zip(widths)
            .map(|(field, width)| Self::pad(field.label(), *width, *field))
            .collect();
        let header = format!(" {}{}", COLUMN_GAP, header.join(COLUMN_GAP));
        lines.push(if self.use_color {
            header.bold().to_string()
        } else {
            header
        });

        let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        lines.push(format!(" {}{}", COLUMN_GAP, rule.join(COLUMN_GAP)));
    }

    fn render_row(
        &self,
        lines: &mut Vec<String>,
        row: &RowView,
        rgb: Option<(u8, u8, u8)>,
        widths: &[usize],
    ) {
        let cells: Vec<String> = row
            .cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| {
                let padded = Self::pad(&Self::cell_text(&cell.text, cell.customized), *width, cell.field);
                if !self.use_color {
                    return padded;
                }
                match (cell.field, rgb) {
                    (Field::Vendor, Some((r, g, b))) => padded.truecolor(r, g, b).bold().to_string(),
                    _ if cell.customized => padded.yellow().to_string(),
                    _ => padded,
                }
            })
            .collect();

        let marker = if row.has_custom { "★" } else { " " };
        lines.push(format!("{}{}{}", marker, COLUMN_GAP, cells.join(COLUMN_GAP)));

        if row.notes_expanded {
            self.render_detail(lines, row);
        }
    }

    fn render_detail(&self, lines: &mut Vec<String>, row: &RowView) {
        let mut parts = Vec::new();
        if let Some(gen) = &row.detail.gen {
            parts.push(gen.clone());
        }
        if !row.detail.notes.is_empty() {
            parts.push(row.detail.notes.clone());
        }
        if !row.detail.datasheet.is_empty() {
            parts.push(row.detail.datasheet.clone());
        }
        if parts.is_empty() {
            parts.push("No notes for this appliance.".to_string());
        }
        lines.push(format!("   ↳ {}", parts.join(" · ")));
    }

    fn render_footer(&self, lines: &mut Vec<String>, model: &ComparisonReadModel<'_>) {
        lines.push(String::new());
        let mut footer = format!(
            "Showing {} of {} appliances",
            model.visible_count, model.total_count
        );
        if model.rows.iter().any(|row| row.has_custom) {
            footer.push_str(" · ★ custom benchmarks applied (* marks overridden values)");
        }
        lines.push(footer);

        if let Some(caveat) = &model.caveat {
            let caveat = format!("⚠ {}", caveat);
            lines.push(if self.use_color {
                caveat.dimmed().to_string()
            } else {
                caveat
            });
        }
    }
}

impl ComparisonFormatter for TableFormatter {
    fn format(&self, model: &ComparisonReadModel<'_>) -> Result<String> {
        let mut lines = Vec::new();

        if model.is_empty() {
            lines.push(NO_MATCHES_MESSAGE.to_string());
        } else {
            let widths = Self::column_widths(model);
            self.render_header(&mut lines, model, &widths);
            for (row, entry) in model.rows.iter().zip(&model.entries) {
                let rgb = model
                    .vendors
                    .get(entry.base().vendor())
                    .and_then(|vendor| vendor.rgb());
                self.render_row(&mut lines, row, rgb, &widths);
            }
        }

        self.render_footer(&mut lines, model);
        Ok(lines.join("\n"))
    }
}
