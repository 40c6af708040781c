//! Read model for one rendering of the comparison
//!
//! Holds both the display projection (`rows`) and the effective appliances
//! it was built from (`entries`), so export can work from raw values.

use crate::comparison::domain::{EffectiveAppliance, Field, VendorTable};

/// Message shown when no appliance passes the filters
pub const NO_MATCHES_MESSAGE: &str = "No appliances match the current filters.";

/// View of the filtered, sorted comparison
#[derive(Debug, Clone)]
pub struct ComparisonReadModel<'a> {
    /// Column order for display and export
    pub fields: Vec<Field>,
    /// Display rows, in visible order
    pub rows: Vec<RowView>,
    /// Effective appliances behind `rows`, same order
    pub entries: Vec<EffectiveAppliance<'a>>,
    pub vendors: &'a VendorTable,
    pub visible_count: usize,
    pub total_count: usize,
    pub methodology: Vec<MethodologyView>,
    pub caveat: Option<String>,
}

impl ComparisonReadModel<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One appliance row
#[derive(Debug, Clone)]
pub struct RowView {
    pub id: String,
    pub vendor_name: String,
    /// Vendor display color as `#RRGGBB`
    pub vendor_color: String,
    pub cells: Vec<CellView>,
    /// At least one custom benchmark is applied
    pub has_custom: bool,
    pub notes_expanded: bool,
    pub detail: RowDetailView,
}

/// One display cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub field: Field,
    pub text: String,
    /// Shows a custom benchmark instead of the catalog value
    pub customized: bool,
}

/// Notes panel content for a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDetailView {
    pub gen: Option<String>,
    pub notes: String,
    pub datasheet: String,
}

/// Vendor methodology notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodologyView {
    pub title: String,
    pub color: String,
    pub text: String,
}
