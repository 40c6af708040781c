use crate::application::read_models::ComparisonReadModel;
use crate::application::state::ComparatorState;
use crate::comparison::domain::Catalog;

/// ComparisonResponse - the loaded catalog together with the resolved view state
#[derive(Debug, Clone)]
pub struct ComparisonResponse {
    pub catalog: Catalog,
    pub state: ComparatorState,
    /// Override entries that were rejected and left out
    pub skipped_overrides: usize,
}

impl ComparisonResponse {
    pub fn new(catalog: Catalog, state: ComparatorState, skipped_overrides: usize) -> Self {
        Self {
            catalog,
            state,
            skipped_overrides,
        }
    }

    pub fn read_model(&self) -> ComparisonReadModel<'_> {
        self.state.read_model(&self.catalog)
    }
}
