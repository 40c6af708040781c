mod collation;
mod sort_order;

pub use collation::locale_compare;
pub use sort_order::SortOrder;
