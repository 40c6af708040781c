/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod comparison_request;
mod comparison_response;
mod export_artifact;
mod output_format;

pub use comparison_request::{ComparisonRequest, OverrideEntry};
pub use comparison_response::ComparisonResponse;
pub use export_artifact::ExportArtifact;
pub use output_format::OutputFormat;
