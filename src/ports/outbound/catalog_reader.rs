use crate::comparison::domain::Catalog;
use crate::shared::Result;

/// CatalogReader port for loading the appliance catalog
///
/// The catalog is supplied once at startup by an external data source
/// (embedded fixture, file, test double).
pub trait CatalogReader {
    /// Loads and validates the catalog
    ///
    /// # Errors
    /// Returns an error if the source cannot be read, is not a valid catalog
    /// document, or violates catalog invariants (duplicate ids, unknown vendors)
    fn read_catalog(&self) -> Result<Catalog>;

    /// Human-readable name of the source, used in progress messages
    fn source_name(&self) -> String;
}
