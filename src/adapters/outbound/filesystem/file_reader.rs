use crate::adapters::outbound::catalog::parse_catalog;
use crate::comparison::domain::Catalog;
use crate::ports::outbound::CatalogReader;
use crate::shared::error::ComparatorError;
use crate::shared::security::read_input_file;
use crate::shared::Result;
use std::path::PathBuf;

/// FileSystemCatalogReader adapter for user-supplied catalog fixtures
///
/// Symbolic links, non-regular files and oversized files are rejected
/// before anything is read.
pub struct FileSystemCatalogReader {
    path: PathBuf,
}

impl FileSystemCatalogReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CatalogReader for FileSystemCatalogReader {
    fn read_catalog(&self) -> Result<Catalog> {
        let content =
            read_input_file(&self.path, "catalog file").map_err(|e| ComparatorError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        parse_catalog(&self.source_name(), &content)
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}
