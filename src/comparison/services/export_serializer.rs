//! CSV export of the visible sequence.
//!
//! Numbers are written raw, not through the display formatter, so the export
//! keeps full precision.

use super::metric_formatter::number_text;
use crate::comparison::domain::{EffectiveAppliance, Field, FieldValue, VendorTable};

/// File name offered for the export
pub const EXPORT_FILE_NAME: &str = "firewall-comparison.csv";

/// MIME type of the export
pub const EXPORT_MIME_TYPE: &str = "text/csv";

/// Serializes rows into CSV: one header line of field labels, then one line
/// per appliance in the same field order. Rows are joined with `\n` and the
/// last row has no trailing newline.
pub fn serialize(rows: &[EffectiveAppliance<'_>], fields: &[Field], vendors: &VendorTable) -> String {
    let header = fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(",");

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(header);
    for row in rows {
        let cells: Vec<String> = fields
            .iter()
            .map(|field| export_cell(row.value(*field), vendors))
            .collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

/// Converts one effective value into its CSV cell
pub fn export_cell(value: Option<FieldValue<'_>>, vendors: &VendorTable) -> String {
    match value {
        None => String::new(),
        Some(FieldValue::Vendor(key)) => vendors
            .display_name(key)
            .unwrap_or_else(|| key.as_str())
            .to_string(),
        Some(FieldValue::Tier(tier)) => tier.label().to_string(),
        Some(FieldValue::FormFactor(form_factor)) => form_factor.label().to_string(),
        Some(FieldValue::Flag(flag)) => (if flag { "Yes" } else { "No" }).to_string(),
        Some(FieldValue::Number(number)) => quote(&number_text(number)),
        Some(FieldValue::Text(text)) => quote(text),
    }
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
