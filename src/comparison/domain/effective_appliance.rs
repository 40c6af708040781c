use super::appliance::Appliance;
use super::field::{Field, FieldValue, Metric};
use super::override_record::OverrideRecord;

/// An appliance as seen after its custom benchmarks are overlaid.
///
/// Borrowed view: nothing is copied or persisted, and the catalog record is
/// never touched. Fields without an override fall through to the catalog,
/// including unpublished ones.
#[derive(Debug, Clone, Copy)]
pub struct EffectiveAppliance<'a> {
    base: &'a Appliance,
    overrides: Option<&'a OverrideRecord>,
}

impl<'a> EffectiveAppliance<'a> {
    pub fn new(base: &'a Appliance, overrides: Option<&'a OverrideRecord>) -> Self {
        Self { base, overrides }
    }

    pub fn base(&self) -> &'a Appliance {
        self.base
    }

    pub fn id(&self) -> &'a str {
        self.base.id()
    }

    pub fn metric(&self, metric: Metric) -> Option<f64> {
        self.overrides
            .and_then(|record| record.get(metric))
            .or_else(|| self.base.metric(metric))
    }

    pub fn value(&self, field: Field) -> Option<FieldValue<'a>> {
        match field.metric() {
            Some(metric) => self.metric(metric).map(FieldValue::Number),
            None => self.base.field_value(field),
        }
    }

    /// True when the metric currently shows a custom benchmark
    pub fn is_customized(&self, metric: Metric) -> bool {
        self.overrides.is_some_and(|record| record.contains(metric))
    }

    pub fn has_overrides(&self) -> bool {
        self.overrides.is_some_and(|record| !record.is_empty())
    }
}
