//! fw-compare - firewall appliance comparison engine
//!
//! Filters, sorts and annotates a catalog of network firewall appliances,
//! renders the visible rows for display, and exports them as CSV. Custom
//! benchmarks shadow catalog values without modifying the catalog.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`comparison`): catalog model, filter/sort engine, formatters
//! - **Application Layer** (`application`): user actions, use cases, read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use fw_compare::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let catalog = BuiltinCatalogReader::new().read_catalog()?;
//! let mut state = ComparatorState::new(&catalog);
//!
//! state.toggle_tier(Tier::Enterprise);
//! state.set_override(&catalog, "xgs-88", "fwThroughput", "9500")?;
//!
//! let model = state.read_model(&catalog);
//! println!("{}", TableFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod comparison;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::catalog::{parse_catalog, BuiltinCatalogReader};
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemCatalogReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CsvFormatter, MarkdownFormatter, TableFormatter,
    };
    pub use crate::application::dto::{
        ComparisonRequest, ComparisonResponse, ExportArtifact, OutputFormat, OverrideEntry,
    };
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::read_models::{
        CellView, ComparisonReadModel, ComparisonReadModelBuilder, RowView, NO_MATCHES_MESSAGE,
    };
    pub use crate::application::state::{parse_benchmark_input, BenchmarkEditor, ComparatorState};
    pub use crate::application::use_cases::{CompareAppliancesUseCase, ExportComparisonUseCase};
    pub use crate::comparison::domain::{
        Appliance, Catalog, EffectiveAppliance, Field, FieldValue, FilterState, FormFactor,
        MethodologyNote, Metric, MetricKind, OverrideRecord, SortDirection, SortState, Tier,
        Vendor, VendorKey, VendorTable,
    };
    pub use crate::comparison::services::export_serializer::{
        self, EXPORT_FILE_NAME, EXPORT_MIME_TYPE,
    };
    pub use crate::comparison::services::metric_formatter::{
        format_metric, format_sessions, format_throughput, UNPUBLISHED,
    };
    pub use crate::comparison::services::{ComparisonEngine, OverrideStore};
    pub use crate::ports::outbound::{
        CatalogReader, ComparisonFormatter, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::error::{ComparatorError, ExitCode};
    pub use crate::shared::Result;
}
