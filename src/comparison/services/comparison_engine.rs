use crate::comparison::domain::{Catalog, EffectiveAppliance, FilterState, SortState};
use crate::comparison::policies::SortOrder;
use crate::comparison::services::OverrideStore;

/// ComparisonEngine - derives the visible, ordered appliance sequence
///
/// A pure function of its inputs: it holds no state and never mutates the
/// catalog, the override store, or the filter/sort state.
pub struct ComparisonEngine;

impl ComparisonEngine {
    /// Overlays overrides, filters, then stably sorts
    ///
    /// # Arguments
    /// * `catalog` - Appliances in catalog order plus the vendor table
    /// * `overrides` - Custom benchmarks to overlay
    /// * `filter` - Inclusion sets and search text
    /// * `sort` - Active sort key and direction
    ///
    /// # Returns
    /// Effective appliances that pass every filter, ordered by `SortOrder`;
    /// ties keep catalog order
    pub fn compute<'a>(
        catalog: &'a Catalog,
        overrides: &'a OverrideStore,
        filter: &FilterState,
        sort: &SortState,
    ) -> Vec<EffectiveAppliance<'a>> {
        let vendors = catalog.vendors();

        let mut visible: Vec<EffectiveAppliance<'a>> = catalog
            .appliances()
            .iter()
            .map(|appliance| EffectiveAppliance::new(appliance, overrides.get(appliance.id())))
            .filter(|effective| {
                let base = effective.base();
                let vendor_name = vendors
                    .display_name(base.vendor())
                    .unwrap_or_else(|| base.vendor().as_str());
                filter.matches(base, vendor_name)
            })
            .collect();

        let order = SortOrder::new(sort);
        // sort_by is stable
        visible.sort_by(|a, b| order.compare(a, b));
        visible
    }
}
