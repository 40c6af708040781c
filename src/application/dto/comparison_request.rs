use crate::comparison::domain::SortDirection;

/// ComparisonRequest - raw view selections from the presentation layer
///
/// Values are kept as entered; the compare use case resolves them against the
/// loaded catalog. `None` inclusion lists mean "everything".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonRequest {
    /// Vendor keys or display names
    pub vendors: Option<Vec<String>>,
    pub tiers: Option<Vec<String>>,
    pub form_factors: Option<Vec<String>>,
    pub search: String,
    /// Column key, e.g. `fwThroughput`
    pub sort_key: Option<String>,
    pub sort_direction: Option<SortDirection>,
    pub overrides: Vec<OverrideEntry>,
}

impl ComparisonRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vendors(mut self, vendors: Vec<String>) -> Self {
        self.vendors = Some(vendors);
        self
    }

    pub fn with_tiers(mut self, tiers: Vec<String>) -> Self {
        self.tiers = Some(tiers);
        self
    }

    pub fn with_form_factors(mut self, form_factors: Vec<String>) -> Self {
        self.form_factors = Some(form_factors);
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    pub fn with_sort(mut self, key: &str, direction: Option<SortDirection>) -> Self {
        self.sort_key = Some(key.to_string());
        self.sort_direction = direction;
        self
    }

    pub fn with_override(mut self, entry: OverrideEntry) -> Self {
        self.overrides.push(entry);
        self
    }
}

/// One custom benchmark as entered: `appliance-id:fieldKey=value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideEntry {
    pub appliance_id: String,
    pub field: String,
    pub value: String,
}

impl OverrideEntry {
    pub fn new(appliance_id: &str, field: &str, value: &str) -> Self {
        Self {
            appliance_id: appliance_id.to_string(),
            field: field.to_string(),
            value: value.to_string(),
        }
    }
}

impl std::str::FromStr for OverrideEntry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            format!(
                "Invalid override: {}. Expected the form 'appliance-id:field=value'",
                s
            )
        };
        let (target, value) = s.split_once('=').ok_or_else(invalid)?;
        let (appliance_id, field) = target.split_once(':').ok_or_else(invalid)?;
        let (appliance_id, field) = (appliance_id.trim(), field.trim());
        if appliance_id.is_empty() || field.is_empty() {
            return Err(invalid());
        }
        Ok(Self::new(appliance_id, field, value.trim()))
    }
}

impl std::fmt::Display for OverrideEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}={}", self.appliance_id, self.field, self.value)
    }
}
