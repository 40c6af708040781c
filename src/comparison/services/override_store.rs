use crate::comparison::domain::{Metric, OverrideRecord};
use crate::shared::error::ComparatorError;
use std::collections::HashMap;

/// OverrideStore - sparse custom benchmarks keyed by appliance id
///
/// Shadows catalog values without touching the catalog. Only metrics can be
/// overridden; the store does not check ids against any catalog, and an
/// unpublished catalog value may be given any finite number.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideStore {
    records: HashMap<String, OverrideRecord>,
}

impl OverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets one field of an appliance's override record by field name
    ///
    /// # Errors
    /// - `InvalidField` when `field` is not an overridable metric key
    /// - `InvalidValue` when `value` is NaN or infinite
    ///
    /// The store is unchanged on error.
    pub fn set_field(&mut self, appliance_id: &str, field: &str, value: f64) -> Result<(), ComparatorError> {
        let metric: Metric = field.parse()?;
        self.set(appliance_id, metric, value)
    }

    /// Typed variant of [`OverrideStore::set_field`]
    pub fn set(&mut self, appliance_id: &str, metric: Metric, value: f64) -> Result<(), ComparatorError> {
        if !value.is_finite() {
            return Err(ComparatorError::InvalidValue {
                input: value.to_string(),
            });
        }
        self.records
            .entry(appliance_id.to_string())
            .or_default()
            .set(metric, value);
        Ok(())
    }

    /// Removes the whole record for an appliance. Returns whether one existed.
    pub fn clear_all(&mut self, appliance_id: &str) -> bool {
        self.records.remove(appliance_id).is_some()
    }

    pub fn get(&self, appliance_id: &str) -> Option<&OverrideRecord> {
        self.records.get(appliance_id)
    }

    pub fn has_overrides(&self, appliance_id: &str) -> bool {
        self.get(appliance_id).is_some_and(|record| !record.is_empty())
    }

    /// Number of appliances carrying at least one override
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
