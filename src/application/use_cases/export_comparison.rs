use crate::application::dto::ExportArtifact;
use crate::application::read_models::ComparisonReadModel;
use crate::comparison::services::export_serializer;
use crate::ports::outbound::ProgressReporter;

/// ExportComparisonUseCase - turns the visible comparison into a CSV artifact
///
/// Exports exactly the rows on screen, in their current order, with
/// overridden values in place of catalog values.
pub struct ExportComparisonUseCase<PR> {
    progress_reporter: PR,
}

impl<PR: ProgressReporter> ExportComparisonUseCase<PR> {
    pub fn new(progress_reporter: PR) -> Self {
        Self { progress_reporter }
    }

    pub fn execute(&self, model: &ComparisonReadModel<'_>) -> ExportArtifact {
        let content = export_serializer::serialize(&model.entries, &model.fields, model.vendors);
        let artifact = ExportArtifact::csv(content);

        self.progress_reporter.report(&format!(
            "📦 Exporting {} row(s) as {}",
            model.entries.len(),
            artifact.file_name
        ));

        artifact
    }
}
