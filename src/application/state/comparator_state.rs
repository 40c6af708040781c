use super::benchmark_editor::{parse_benchmark_input, BenchmarkEditor};
use crate::application::read_models::{ComparisonReadModel, ComparisonReadModelBuilder};
use crate::comparison::domain::{
    Appliance, Catalog, EffectiveAppliance, Field, FilterState, FormFactor, Metric, SortState, Tier, VendorKey,
};
use crate::comparison::services::metric_formatter::number_text;
use crate::comparison::services::{ComparisonEngine, OverrideStore};
use crate::shared::error::ComparatorError;

/// ComparatorState - everything the comparison screen remembers between actions
///
/// Owned by the caller and passed in explicitly; the catalog itself is never
/// stored here and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparatorState {
    filter: FilterState,
    sort: SortState,
    overrides: OverrideStore,
    editor: Option<BenchmarkEditor>,
    expanded_notes: Option<String>,
}

impl ComparatorState {
    /// Initial state: every vendor, tier and form factor selected, sorted by
    /// firewall throughput descending, no overrides.
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            filter: FilterState::all(catalog.vendors()),
            sort: SortState::default(),
            overrides: OverrideStore::new(),
            editor: None,
            expanded_notes: None,
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn overrides(&self) -> &OverrideStore {
        &self.overrides
    }

    pub fn editor(&self) -> Option<&BenchmarkEditor> {
        self.editor.as_ref()
    }

    pub fn expanded_notes(&self) -> Option<&str> {
        self.expanded_notes.as_deref()
    }

    pub fn toggle_vendor(&mut self, key: &VendorKey) {
        self.filter.toggle_vendor(key);
    }

    pub fn toggle_tier(&mut self, tier: Tier) {
        self.filter.toggle_tier(tier);
    }

    pub fn toggle_form_factor(&mut self, form_factor: FormFactor) {
        self.filter.toggle_form_factor(form_factor);
    }

    pub fn set_search(&mut self, search: &str) {
        self.filter.set_search(search);
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    /// Column header click: same key flips direction, a new key starts descending
    pub fn select_sort(&mut self, key: Field) {
        self.sort.select(key);
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
    }

    /// Applies a raw-text override for one appliance field.
    ///
    /// # Errors
    /// - `UnknownAppliance` when `id` is not in the catalog
    /// - `InvalidField` when `field` is not an overridable metric
    /// - `InvalidValue` when `raw` does not start with a finite number
    ///
    /// Nothing changes on error.
    pub fn set_override(
        &mut self,
        catalog: &Catalog,
        id: &str,
        field: &str,
        raw: &str,
    ) -> Result<(), ComparatorError> {
        Self::require_appliance(catalog, id)?;
        let metric: Metric = field.parse()?;
        let value = parse_benchmark_input(raw)?;
        self.overrides.set(id, metric, value)
    }

    /// Removes every override for `id`. Returns whether any existed.
    pub fn clear_overrides(&mut self, id: &str) -> bool {
        self.overrides.clear_all(id)
    }

    /// Opens the notes panel for `id`, or closes it if it is already open.
    /// At most one panel is open at a time.
    pub fn toggle_notes(&mut self, id: &str) {
        if self.expanded_notes.as_deref() == Some(id) {
            self.expanded_notes = None;
        } else {
            self.expanded_notes = Some(id.to_string());
        }
    }

    /// Opens the benchmark editor prefilled with the current effective value
    pub fn begin_edit(&mut self, catalog: &Catalog, id: &str, field: Metric) -> Result<(), ComparatorError> {
        let appliance = Self::require_appliance(catalog, id)?;
        let effective = EffectiveAppliance::new(appliance, self.overrides.get(id));
        let input = effective
            .metric(field)
            .map(number_text)
            .unwrap_or_default();
        self.editor = Some(BenchmarkEditor::new(id, field, &input));
        Ok(())
    }

    /// Switches the edited field. The input text is left as typed.
    pub fn set_edit_field(&mut self, field: Metric) {
        if let Some(editor) = self.editor.as_mut() {
            editor.set_field(field);
        }
    }

    pub fn set_edit_input(&mut self, input: &str) {
        if let Some(editor) = self.editor.as_mut() {
            editor.set_input(input);
        }
    }

    /// Commits the open edit.
    ///
    /// With no editor open this does nothing. On `InvalidValue` the store is
    /// untouched and the editor stays open with its input.
    pub fn save_edit(&mut self) -> Result<(), ComparatorError> {
        let Some(editor) = self.editor.as_ref() else {
            return Ok(());
        };
        let value = editor.value()?;
        self.overrides.set(editor.appliance_id(), editor.field(), value)?;
        self.editor = None;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editor = None;
    }

    /// Drops every override for the appliance being edited and closes the editor
    pub fn clear_edit_target(&mut self) -> bool {
        match self.editor.take() {
            Some(editor) => self.overrides.clear_all(editor.appliance_id()),
            None => false,
        }
    }

    /// Visible appliances for the current filter, sort and overrides
    pub fn visible<'a>(&'a self, catalog: &'a Catalog) -> Vec<EffectiveAppliance<'a>> {
        ComparisonEngine::compute(catalog, &self.overrides, &self.filter, &self.sort)
    }

    pub fn read_model<'a>(&'a self, catalog: &'a Catalog) -> ComparisonReadModel<'a> {
        ComparisonReadModelBuilder::build(catalog, self.visible(catalog), self.expanded_notes())
    }

    fn require_appliance<'c>(
        catalog: &'c Catalog,
        id: &str,
    ) -> Result<&'c Appliance, ComparatorError> {
        catalog
            .get(id)
            .ok_or_else(|| ComparatorError::UnknownAppliance { id: id.to_string() })
    }
}
