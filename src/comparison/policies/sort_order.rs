use super::collation::locale_compare;
use crate::comparison::domain::{EffectiveAppliance, Field, FieldValue, SortDirection, SortState};
use std::cmp::Ordering;

/// SortOrder policy: the total order used to rank visible appliances
///
/// Rules, in order:
/// 1. Two absent (unpublished) values are equal.
/// 2. An absent value always sorts after a present one, in both directions.
/// 3. Booleans: `true` first when ascending.
/// 4. Strings and enum references: locale-aware comparison.
/// 5. Numbers: numeric comparison.
///
/// The direction reverses only rules 3-5.
#[derive(Debug, Clone, Copy)]
pub struct SortOrder {
    key: Field,
    direction: SortDirection,
}

impl SortOrder {
    pub fn new(sort: &SortState) -> Self {
        Self {
            key: sort.key,
            direction: sort.direction,
        }
    }

    pub fn compare(&self, a: &EffectiveAppliance<'_>, b: &EffectiveAppliance<'_>) -> Ordering {
        self.compare_values(a.value(self.key), b.value(self.key))
    }

    pub fn compare_values(&self, a: Option<FieldValue<'_>>, b: Option<FieldValue<'_>>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => {
                let ascending = Self::compare_present(a, b);
                match self.direction {
                    SortDirection::Ascending => ascending,
                    SortDirection::Descending => ascending.reverse(),
                }
            }
        }
    }

    fn compare_present(a: FieldValue<'_>, b: FieldValue<'_>) -> Ordering {
        match (a, b) {
            (FieldValue::Flag(a), FieldValue::Flag(b)) => b.cmp(&a),
            (FieldValue::Number(a), FieldValue::Number(b)) => {
                a.partial_cmp(&b).unwrap_or(Ordering::Equal)
            }
            _ => match (a.sort_text(), b.sort_text()) {
                (Some(a), Some(b)) => locale_compare(a, b),
                // Mixed kinds never share a field
                _ => Ordering::Equal,
            },
        }
    }
}
