//! Read models for the comparison view
//!
//! View-optimized projections of the engine output, consumed by the
//! formatters.

pub mod comparison_read_model;
pub mod comparison_read_model_builder;

pub use comparison_read_model::{
    CellView, ComparisonReadModel, MethodologyView, RowDetailView, RowView, NO_MATCHES_MESSAGE,
};
pub use comparison_read_model_builder::ComparisonReadModelBuilder;
