use super::field::Metric;
use std::collections::BTreeMap;

/// Custom benchmark values entered for one appliance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideRecord {
    values: BTreeMap<Metric, f64>,
}

impl OverrideRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, metric: Metric) -> Option<f64> {
        self.values.get(&metric).copied()
    }

    /// Sets or replaces a single metric, keeping the others
    pub fn set(&mut self, metric: Metric, value: f64) {
        self.values.insert(metric, value);
    }

    pub fn contains(&self, metric: Metric) -> bool {
        self.values.contains_key(&metric)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        self.values.iter().map(|(metric, value)| (*metric, *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
