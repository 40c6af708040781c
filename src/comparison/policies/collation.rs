use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;

thread_local! {
    /// Root-locale UCA collator with default strength (tertiary) and
    /// non-ignorable punctuation
    static ROOT_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Compares two strings with the root-locale Unicode collation: punctuation
/// before symbols, digits and letters; letters case-insensitive at the primary
/// level, lowercase before uppercase on a tie. Digits are not compared as
/// numbers.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        // Only reachable without compiled root data
        None => a.cmp(b),
    })
}
