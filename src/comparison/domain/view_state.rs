use super::appliance::Appliance;
use super::classification::{FormFactor, Tier};
use super::field::Field;
use super::vendor::{VendorKey, VendorTable};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Inclusion sets and free-text search applied to the catalog.
///
/// An empty inclusion set excludes every appliance for that dimension; use
/// [`FilterState::all`] for the initial, fully populated state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    vendors: BTreeSet<VendorKey>,
    tiers: BTreeSet<Tier>,
    form_factors: BTreeSet<FormFactor>,
    search: String,
}

impl FilterState {
    /// Every known vendor, tier and form factor included, no search text
    pub fn all(vendors: &VendorTable) -> Self {
        Self {
            vendors: vendors.keys().cloned().collect(),
            tiers: Tier::ALL.into_iter().collect(),
            form_factors: FormFactor::ALL.into_iter().collect(),
            search: String::new(),
        }
    }

    pub fn new(
        vendors: impl IntoIterator<Item = VendorKey>,
        tiers: impl IntoIterator<Item = Tier>,
        form_factors: impl IntoIterator<Item = FormFactor>,
        search: &str,
    ) -> Self {
        Self {
            vendors: vendors.into_iter().collect(),
            tiers: tiers.into_iter().collect(),
            form_factors: form_factors.into_iter().collect(),
            search: search.to_string(),
        }
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    pub fn vendors(&self) -> &BTreeSet<VendorKey> {
        &self.vendors
    }

    pub fn tiers(&self) -> &BTreeSet<Tier> {
        &self.tiers
    }

    pub fn form_factors(&self) -> &BTreeSet<FormFactor> {
        &self.form_factors
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn toggle_vendor(&mut self, key: &VendorKey) {
        if !self.vendors.remove(key) {
            self.vendors.insert(key.clone());
        }
    }

    pub fn toggle_tier(&mut self, tier: Tier) {
        if !self.tiers.remove(&tier) {
            self.tiers.insert(tier);
        }
    }

    pub fn toggle_form_factor(&mut self, form_factor: FormFactor) {
        if !self.form_factors.remove(&form_factor) {
            self.form_factors.insert(form_factor);
        }
    }

    pub fn set_vendors(&mut self, vendors: impl IntoIterator<Item = VendorKey>) {
        self.vendors = vendors.into_iter().collect();
    }

    pub fn set_tiers(&mut self, tiers: impl IntoIterator<Item = Tier>) {
        self.tiers = tiers.into_iter().collect();
    }

    pub fn set_form_factors(&mut self, form_factors: impl IntoIterator<Item = FormFactor>) {
        self.form_factors = form_factors.into_iter().collect();
    }

    pub fn set_search(&mut self, search: &str) {
        self.search = search.to_string();
    }

    /// True when every inclusion set is a subset of `other`'s and the
    /// search text is identical
    pub fn is_narrower_than(&self, other: &FilterState) -> bool {
        self.vendors.is_subset(&other.vendors)
            && self.tiers.is_subset(&other.tiers)
            && self.form_factors.is_subset(&other.form_factors)
            && self.search == other.search
    }

    /// Checks one appliance against all predicates. `vendor_name` is the
    /// vendor's display name, which the search also matches.
    pub fn matches(&self, appliance: &Appliance, vendor_name: &str) -> bool {
        self.vendors.contains(appliance.vendor())
            && self.tiers.contains(&appliance.tier())
            && self.form_factors.contains(&appliance.form_factor())
            && self.matches_search(appliance.model(), vendor_name)
    }

    fn matches_search(&self, model: &str, vendor_name: &str) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        model.to_lowercase().contains(&needle) || vendor_name.to_lowercase().contains(&needle)
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(format!(
                "Invalid sort direction: {}. Please specify 'asc' or 'desc'",
                s
            )),
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

/// Single active sort key and its direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: Field,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: Field, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Column-header click: reselecting the active key flips the direction,
    /// a new key starts out descending.
    pub fn select(&mut self, key: Field) {
        if self.key == key {
            self.direction = self.direction.toggled();
        } else {
            self.key = key;
            self.direction = SortDirection::Descending;
        }
    }
}

impl Default for SortState {
    fn default() -> Self {
        Self::new(Field::FwThroughput, SortDirection::Descending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::domain::Vendor;

    fn table() -> VendorTable {
        VendorTable::new(vec![
            Vendor::new("sophos", "Sophos", "#0073CF", "XGS"),
            Vendor::new("meraki", "Meraki", "#00BCEB", "MX"),
        ])
    }

    fn xgs() -> Appliance {
        Appliance::new("xgs-88", "sophos", "XGS 88", Tier::Soho, FormFactor::Desktop)
    }

    #[test]
    fn test_all_is_fully_populated() {
        let filter = FilterState::all(&table());
        assert_eq!(filter.vendors().len(), 2);
        assert_eq!(filter.tiers().len(), 5);
        assert_eq!(filter.form_factors().len(), 3);
        assert!(filter.matches(&xgs(), "Sophos"));
    }

    #[test]
    fn test_empty_set_shows_nothing() {
        let filter = FilterState::default();
        assert!(!filter.matches(&xgs(), "Sophos"));
    }

    #[test]
    fn test_toggle_removes_then_restores() {
        let mut filter = FilterState::all(&table());
        filter.toggle_tier(Tier::Soho);
        assert!(!filter.matches(&xgs(), "Sophos"));
        filter.toggle_tier(Tier::Soho);
        assert!(filter.matches(&xgs(), "Sophos"));

        filter.toggle_vendor(&VendorKey::from("sophos"));
        assert!(!filter.matches(&xgs(), "Sophos"));
        filter.toggle_form_factor(FormFactor::Desktop);
        assert!(!filter.form_factors().contains(&FormFactor::Desktop));
    }

    #[test]
    fn test_search_matches_model_or_vendor_name_case_insensitive() {
        let filter = FilterState::all(&table()).with_search("xgs 8");
        assert!(filter.matches(&xgs(), "Sophos"));

        let filter = FilterState::all(&table()).with_search("SOPHOS");
        assert!(filter.matches(&xgs(), "Sophos"));

        let filter = FilterState::all(&table()).with_search("meraki");
        assert!(!filter.matches(&xgs(), "Sophos"));
    }

    #[test]
    fn test_is_narrower_than() {
        let all = FilterState::all(&table());
        let mut narrow = all.clone();
        narrow.toggle_tier(Tier::Enterprise);
        assert!(narrow.is_narrower_than(&all));
        assert!(!all.is_narrower_than(&narrow));
        assert!(!narrow.clone().with_search("x").is_narrower_than(&all));
    }

    #[test]
    fn test_sort_select_toggles_or_resets() {
        let mut sort = SortState::default();
        assert_eq!(sort.key, Field::FwThroughput);
        assert_eq!(sort.direction, SortDirection::Descending);

        sort.select(Field::FwThroughput);
        assert_eq!(sort.direction, SortDirection::Ascending);

        sort.select(Field::Model);
        assert_eq!(sort, SortState::new(Field::Model, SortDirection::Descending));
    }

    #[test]
    fn test_sort_direction_from_str() {
        assert_eq!("ASC".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
        assert_eq!(
            "descending".parse::<SortDirection>().unwrap(),
            SortDirection::Descending
        );
        assert!("up".parse::<SortDirection>().unwrap_err().contains("Invalid sort direction"));
    }
}
