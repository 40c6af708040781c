mod comparison_engine;
pub mod export_serializer;
pub mod metric_formatter;
mod override_store;

pub use comparison_engine::ComparisonEngine;
pub use override_store::OverrideStore;
