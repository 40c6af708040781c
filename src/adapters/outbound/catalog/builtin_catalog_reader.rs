use super::catalog_document::parse_catalog;
use crate::comparison::domain::Catalog;
use crate::ports::outbound::CatalogReader;
use crate::shared::Result;

const BUILTIN_CATALOG: &str = include_str!("../../../../data/appliances.json");

/// CatalogReader over the catalog compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalogReader;

impl BuiltinCatalogReader {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogReader for BuiltinCatalogReader {
    fn read_catalog(&self) -> Result<Catalog> {
        parse_catalog(&self.source_name(), BUILTIN_CATALOG)
    }

    fn source_name(&self) -> String {
        "built-in catalog".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::domain::{FormFactor, Metric, Tier, VendorKey};

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = BuiltinCatalogReader::new().read_catalog().unwrap();
        assert_eq!(catalog.len(), 59);
        assert_eq!(catalog.vendors().len(), 6);
        assert!(catalog.caveat().is_some());
    }

    #[test]
    fn test_builtin_catalog_vendors_have_methodology() {
        let catalog = BuiltinCatalogReader::new().read_catalog().unwrap();
        for key in ["sophos", "fortinet", "paloalto", "meraki", "watchguard", "sonicwall"] {
            let vendor = catalog.vendors().get(&VendorKey::from(key)).unwrap();
            assert!(vendor.methodology.is_some(), "{key}");
            assert!(vendor.rgb().is_some(), "{key}");
        }
    }

    #[test]
    fn test_builtin_catalog_known_records() {
        let catalog = BuiltinCatalogReader::new().read_catalog().unwrap();

        let xgs_88 = catalog.get("xgs-88").unwrap();
        assert_eq!(xgs_88.model(), "XGS 88");
        assert_eq!(xgs_88.tier(), Tier::Soho);
        assert_eq!(xgs_88.form_factor(), FormFactor::Desktop);
        assert_eq!(xgs_88.metric(Metric::FwThroughput), Some(9000.0));
        assert_eq!(xgs_88.metric(Metric::MaxSessions), Some(1_600_000.0));

        let xgs_108 = catalog.get("xgs-108").unwrap();
        assert_eq!(xgs_108.metric(Metric::FwThroughput), Some(12500.0));
        assert_eq!(xgs_108.ports(), "9x 2.5GE RJ45");
    }
}
