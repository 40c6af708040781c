use crate::comparison::domain::{Appliance, Catalog, Vendor, VendorTable};
use crate::shared::error::ComparatorError;
use crate::shared::Result;
use serde::Deserialize;

/// On-disk shape of a catalog fixture
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    caveat: Option<String>,
    vendors: Vec<Vendor>,
    appliances: Vec<Appliance>,
}

/// Decodes a JSON catalog fixture and validates it into a [`Catalog`]
///
/// # Errors
/// - `CatalogParseError` when the JSON is malformed or has the wrong shape
/// - `DuplicateAppliance` / `UnknownVendor` from catalog validation
pub fn parse_catalog(source_name: &str, json: &str) -> Result<Catalog> {
    let document: CatalogDocument =
        serde_json::from_str(json).map_err(|e| ComparatorError::CatalogParseError {
            source_name: source_name.to_string(),
            details: e.to_string(),
        })?;

    let catalog = Catalog::new(VendorTable::new(document.vendors), document.appliances)?
        .with_caveat(document.caveat);
    Ok(catalog)
}
