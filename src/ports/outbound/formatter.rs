use crate::application::read_models::ComparisonReadModel;
use crate::shared::Result;

/// ComparisonFormatter port for rendering the comparison
///
/// Implemented by the CSV export, Markdown report and terminal table
/// adapters.
pub trait ComparisonFormatter {
    /// Renders the read model
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, model: &ComparisonReadModel<'_>) -> Result<String>;
}
