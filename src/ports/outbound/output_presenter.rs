use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// Abstracts where rendered output goes (stdout, a file).
pub trait OutputPresenter {
    /// Presents the rendered content
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is rejected by the presenter's safety checks
    fn present(&self, content: &str) -> Result<()>;
}
