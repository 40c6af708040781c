use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::comparison::services::export_serializer::EXPORT_FILE_NAME;
use crate::ports::outbound::OutputPresenter;
use std::path::{Path, PathBuf};

/// Where rendered output goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    File(PathBuf),
}

impl PresenterType {
    /// `--output` given: that file, otherwise stdout
    pub fn for_output(output: Option<PathBuf>) -> Self {
        output.map_or(PresenterType::Stdout, PresenterType::File)
    }

    /// The CSV export file inside `directory`
    pub fn export_file(directory: &Path) -> Self {
        PresenterType::File(directory.join(EXPORT_FILE_NAME))
    }
}

/// Factory for creating output presenters
pub struct PresenterFactory;

impl PresenterFactory {
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
