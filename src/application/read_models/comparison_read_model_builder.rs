//! Builder for constructing ComparisonReadModel from the engine output
//!
//! This is the view projector: it maps effective values to the strings the
//! comparison table shows.

use super::comparison_read_model::{
    CellView, ComparisonReadModel, MethodologyView, RowDetailView, RowView,
};
use crate::comparison::domain::{Catalog, EffectiveAppliance, Field, FieldValue, VendorTable};
use crate::comparison::services::metric_formatter::{format_metric, number_text, UNPUBLISHED};

pub struct ComparisonReadModelBuilder;

impl ComparisonReadModelBuilder {
    /// Builds the read model
    ///
    /// # Arguments
    /// * `catalog` - The catalog the entries came from (for vendor data and totals)
    /// * `entries` - Engine output, in visible order
    /// * `expanded_notes` - Appliance id whose notes panel is open, if any
    pub fn build<'a>(
        catalog: &'a Catalog,
        entries: Vec<EffectiveAppliance<'a>>,
        expanded_notes: Option<&str>,
    ) -> ComparisonReadModel<'a> {
        let fields = Field::ALL.to_vec();
        let vendors = catalog.vendors();

        let rows = entries
            .iter()
            .map(|entry| Self::build_row(entry, &fields, vendors, expanded_notes))
            .collect();

        ComparisonReadModel {
            fields,
            rows,
            visible_count: entries.len(),
            total_count: catalog.len(),
            entries,
            vendors,
            methodology: Self::build_methodology(vendors),
            caveat: catalog.caveat().map(str::to_string),
        }
    }

    fn build_row(
        entry: &EffectiveAppliance<'_>,
        fields: &[Field],
        vendors: &VendorTable,
        expanded_notes: Option<&str>,
    ) -> RowView {
        let base = entry.base();
        let vendor = vendors.get(base.vendor());

        let cells = fields
            .iter()
            .map(|field| CellView {
                field: *field,
                text: Self::display_text(entry, *field, vendors),
                customized: field.metric().is_some_and(|m| entry.is_customized(m)),
            })
            .collect();

        RowView {
            id: entry.id().to_string(),
            vendor_name: vendor
                .map(|v| v.name.clone())
                .unwrap_or_else(|| base.vendor().to_string()),
            vendor_color: vendor.map(|v| v.color.clone()).unwrap_or_default(),
            cells,
            has_custom: entry.has_overrides(),
            notes_expanded: expanded_notes == Some(entry.id()),
            detail: RowDetailView {
                gen: base.gen().map(str::to_string),
                notes: base.notes().to_string(),
                datasheet: base.datasheet().to_string(),
            },
        }
    }

    /// Display string for one cell
    pub fn display_text(entry: &EffectiveAppliance<'_>, field: Field, vendors: &VendorTable) -> String {
        if let Some(metric) = field.metric() {
            return format_metric(metric, entry.metric(metric));
        }

        match (field, entry.value(field)) {
            (Field::Rfc2544, Some(FieldValue::Flag(true))) => "⚑ Yes".to_string(),
            (Field::Rfc2544, _) => UNPUBLISHED.to_string(),
            (_, Some(FieldValue::Flag(flag))) => (if flag { "✓" } else { "✗" }).to_string(),
            (_, Some(FieldValue::Vendor(key))) => vendors
                .display_name(key)
                .unwrap_or_else(|| key.as_str())
                .to_string(),
            (_, Some(FieldValue::Tier(tier))) => tier.label().to_string(),
            (_, Some(FieldValue::FormFactor(form_factor))) => form_factor.label().to_string(),
            (_, Some(FieldValue::Text(""))) => UNPUBLISHED.to_string(),
            (_, Some(FieldValue::Text(text))) => text.to_string(),
            (_, Some(FieldValue::Number(number))) => number_text(number),
            (_, None) => UNPUBLISHED.to_string(),
        }
    }

    fn build_methodology(vendors: &VendorTable) -> Vec<MethodologyView> {
        vendors
            .iter()
            .filter_map(|vendor| {
                vendor.methodology.as_ref().map(|note| MethodologyView {
                    title: note.title.clone(),
                    color: vendor.color.clone(),
                    text: note.text.clone(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::domain::{
        Appliance, FormFactor, MethodologyNote, Metric, OverrideRecord, Tier, Vendor,
    };

    fn catalog() -> Catalog {
        let mut sophos = Vendor::new("sophos", "Sophos", "#0073CF", "XGS");
        sophos.methodology = Some(MethodologyNote {
            title: "Sophos XGS".to_string(),
            text: "FW Throughput: HTTP traffic".to_string(),
        });
        Catalog::new(
            VendorTable::new(vec![sophos, Vendor::new("meraki", "Meraki", "#00BCEB", "MX")]),
            vec![
                Appliance::new("xgs-108", "sophos", "XGS 108", Tier::Soho, FormFactor::Desktop)
                    .with_metric(Metric::FwThroughput, Some(12500.0))
                    .with_metric(Metric::MaxSessions, Some(4_190_000.0))
                    .with_capabilities(true, false, true)
                    .with_gen("Gen 2")
                    .with_notes("Single CPU.", "https://example.com/xgs"),
                Appliance::new("mx68", "meraki", "MX68", Tier::Soho, FormFactor::Desktop),
            ],
        )
        .unwrap()
        .with_caveat(Some("Approximations only.".to_string()))
    }

    fn text_of(row: &RowView, field: Field) -> &str {
        &row.cells.iter().find(|c| c.field == field).unwrap().text
    }

    #[test]
    fn test_display_projection() {
        let catalog = catalog();
        let entries = catalog
            .appliances()
            .iter()
            .map(|a| EffectiveAppliance::new(a, None))
            .collect();
        let model = ComparisonReadModelBuilder::build(&catalog, entries, None);

        let row = &model.rows[0];
        assert_eq!(text_of(row, Field::Vendor), "Sophos");
        assert_eq!(text_of(row, Field::Tier), "SOHO / Branch");
        assert_eq!(text_of(row, Field::FormFactor), "Desktop");
        assert_eq!(text_of(row, Field::FwThroughput), "12.5 Gbps");
        assert_eq!(text_of(row, Field::MaxSessions), "4.19M");
        assert_eq!(text_of(row, Field::IpsThroughput), "—");
        assert_eq!(text_of(row, Field::Ha), "✓");
        assert_eq!(text_of(row, Field::RedundantPower), "✗");
        assert_eq!(text_of(row, Field::Rfc2544), "⚑ Yes");
        assert_eq!(text_of(&model.rows[1], Field::Rfc2544), "—");
        assert_eq!(text_of(&model.rows[1], Field::Ports), "—");
        assert_eq!(row.vendor_color, "#0073CF");
        assert_eq!(row.detail.gen.as_deref(), Some("Gen 2"));
        assert!(!row.has_custom);
    }

    #[test]
    fn test_counts_and_metadata() {
        let catalog = catalog();
        let entries = vec![EffectiveAppliance::new(&catalog.appliances()[1], None)];
        let model = ComparisonReadModelBuilder::build(&catalog, entries, Some("mx68"));

        assert_eq!(model.visible_count, 1);
        assert_eq!(model.total_count, 2);
        assert!(model.rows[0].notes_expanded);
        assert_eq!(model.methodology.len(), 1);
        assert_eq!(model.methodology[0].title, "Sophos XGS");
        assert_eq!(model.caveat.as_deref(), Some("Approximations only."));
    }

    #[test]
    fn test_customized_cells_are_flagged() {
        let catalog = catalog();
        let mut record = OverrideRecord::new();
        record.set(Metric::FwThroughput, 8000.0);
        let entries = vec![EffectiveAppliance::new(&catalog.appliances()[0], Some(&record))];
        let model = ComparisonReadModelBuilder::build(&catalog, entries, None);

        let row = &model.rows[0];
        assert!(row.has_custom);
        let cell = row.cells.iter().find(|c| c.field == Field::FwThroughput).unwrap();
        assert!(cell.customized);
        assert_eq!(cell.text, "8 Gbps");
        let sessions = row.cells.iter().find(|c| c.field == Field::MaxSessions).unwrap();
        assert!(!sessions.customized);
    }

    #[test]
    fn test_empty_model() {
        let catalog = catalog();
        let model = ComparisonReadModelBuilder::build(&catalog, Vec::new(), None);
        assert!(model.is_empty());
        assert_eq!(model.visible_count, 0);
        assert_eq!(model.total_count, 2);
    }
}
