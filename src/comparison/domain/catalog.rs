use super::appliance::Appliance;
use super::vendor::VendorTable;
use crate::shared::error::ComparatorError;
use std::collections::HashSet;

/// Immutable, ordered appliance catalog plus its vendor reference table
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    vendors: VendorTable,
    appliances: Vec<Appliance>,
    caveat: Option<String>,
}

impl Catalog {
    /// Builds a catalog, checking that appliance ids are unique and that
    /// every appliance references a known vendor.
    pub fn new(vendors: VendorTable, appliances: Vec<Appliance>) -> Result<Self, ComparatorError> {
        let mut seen = HashSet::new();
        for appliance in &appliances {
            if !seen.insert(appliance.id()) {
                return Err(ComparatorError::DuplicateAppliance {
                    id: appliance.id().to_string(),
                });
            }
            if !vendors.contains(appliance.vendor()) {
                return Err(ComparatorError::UnknownVendor {
                    key: appliance.vendor().to_string(),
                });
            }
        }

        Ok(Self {
            vendors,
            appliances,
            caveat: None,
        })
    }

    pub fn with_caveat(mut self, caveat: Option<String>) -> Self {
        self.caveat = caveat;
        self
    }

    pub fn vendors(&self) -> &VendorTable {
        &self.vendors
    }

    pub fn appliances(&self) -> &[Appliance] {
        &self.appliances
    }

    pub fn get(&self, id: &str) -> Option<&Appliance> {
        self.appliances.iter().find(|a| a.id() == id)
    }

    /// Cross-vendor comparison caveat, if the data source ships one
    pub fn caveat(&self) -> Option<&str> {
        self.caveat.as_deref()
    }

    pub fn len(&self) -> usize {
        self.appliances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appliances.is_empty()
    }
}
