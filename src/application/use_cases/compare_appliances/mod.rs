use crate::application::dto::{ComparisonRequest, ComparisonResponse};
use crate::application::state::ComparatorState;
use crate::comparison::domain::{
    Catalog, Field, FilterState, FormFactor, SortDirection, SortState, Tier, VendorKey,
};
use crate::ports::outbound::{CatalogReader, ProgressReporter};
use crate::shared::error::ComparatorError;
use crate::shared::Result;

/// CompareAppliancesUseCase - loads the catalog and resolves a view request
///
/// # Type Parameters
/// * `CR` - CatalogReader implementation
/// * `PR` - ProgressReporter implementation
pub struct CompareAppliancesUseCase<CR, PR> {
    catalog_reader: CR,
    progress_reporter: PR,
}

impl<CR, PR> CompareAppliancesUseCase<CR, PR>
where
    CR: CatalogReader,
    PR: ProgressReporter,
{
    pub fn new(catalog_reader: CR, progress_reporter: PR) -> Self {
        Self {
            catalog_reader,
            progress_reporter,
        }
    }

    /// Executes the comparison
    ///
    /// Unknown vendors, tiers, form factors or sort keys fail the request.
    /// Override entries that are rejected are reported and skipped; the rest
    /// of the request still applies.
    pub fn execute(&self, request: ComparisonRequest) -> Result<ComparisonResponse> {
        // Step 1: Load the catalog
        let catalog = self.load_catalog()?;

        // Step 2: Resolve filter and sort selections
        let mut state = ComparatorState::new(&catalog);
        state.set_filter(Self::build_filter(&catalog, &request)?);
        if let Some(sort) = Self::build_sort(&request)? {
            state.set_sort(sort);
        }

        // Step 3: Apply custom benchmarks
        let skipped = self.apply_overrides(&catalog, &mut state, &request);

        let visible = state.visible(&catalog).len();
        self.progress_reporter.report(&format!(
            "🔍 {} of {} appliance(s) match the current filters",
            visible,
            catalog.len()
        ));

        Ok(ComparisonResponse::new(catalog, state, skipped))
    }

    fn load_catalog(&self) -> Result<Catalog> {
        self.progress_reporter.report(&format!(
            "📖 Loading appliance catalog from: {}",
            self.catalog_reader.source_name()
        ));

        let catalog = self.catalog_reader.read_catalog()?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} appliance(s) from {} vendor(s)",
            catalog.len(),
            catalog.vendors().len()
        ));

        Ok(catalog)
    }

    fn build_filter(catalog: &Catalog, request: &ComparisonRequest) -> Result<FilterState> {
        let mut filter = FilterState::all(catalog.vendors()).with_search(&request.search);

        if let Some(vendors) = &request.vendors {
            let keys = vendors
                .iter()
                .map(|raw| {
                    catalog
                        .vendors()
                        .resolve(raw)
                        .map(|vendor| vendor.key.clone())
                        .ok_or_else(|| ComparatorError::UnknownVendor { key: raw.clone() })
                })
                .collect::<std::result::Result<Vec<VendorKey>, _>>()?;
            filter.set_vendors(keys);
        }

        if let Some(tiers) = &request.tiers {
            let tiers = tiers
                .iter()
                .map(|raw| raw.parse::<Tier>())
                .collect::<std::result::Result<Vec<_>, _>>()?;
            filter.set_tiers(tiers);
        }

        if let Some(form_factors) = &request.form_factors {
            let form_factors = form_factors
                .iter()
                .map(|raw| raw.parse::<FormFactor>())
                .collect::<std::result::Result<Vec<_>, _>>()?;
            filter.set_form_factors(form_factors);
        }

        Ok(filter)
    }

    fn build_sort(request: &ComparisonRequest) -> Result<Option<SortState>> {
        match (&request.sort_key, request.sort_direction) {
            (Some(key), direction) => {
                let field: Field = key.parse()?;
                Ok(Some(SortState::new(
                    field,
                    direction.unwrap_or(SortDirection::Descending),
                )))
            }
            (None, Some(direction)) => Ok(Some(SortState {
                direction,
                ..SortState::default()
            })),
            (None, None) => Ok(None),
        }
    }

    fn apply_overrides(
        &self,
        catalog: &Catalog,
        state: &mut ComparatorState,
        request: &ComparisonRequest,
    ) -> usize {
        let mut skipped = 0;
        for entry in &request.overrides {
            if let Err(e) = state.set_override(catalog, &entry.appliance_id, &entry.field, &entry.value) {
                skipped += 1;
                self.progress_reporter
                    .report_error(&format!("⚠️  Skipping override '{}': {}", entry, e));
            }
        }

        if !state.overrides().is_empty() {
            self.progress_reporter.report(&format!(
                "★ Custom benchmarks applied to {} appliance(s)",
                state.overrides().len()
            ));
        }
        skipped
    }
}
