use crate::application::read_models::ComparisonReadModel;
use crate::comparison::services::export_serializer;
use crate::ports::outbound::ComparisonFormatter;
use crate::shared::Result;

/// CsvFormatter adapter producing the same text as the CSV export
pub struct CsvFormatter;

impl CsvFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonFormatter for CsvFormatter {
    fn format(&self, model: &ComparisonReadModel<'_>) -> Result<String> {
        Ok(export_serializer::serialize(
            &model.entries,
            &model.fields,
            model.vendors,
        ))
    }
}
